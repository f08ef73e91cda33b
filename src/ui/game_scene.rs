//! Terminal rendering of a running session.
//!
//! The world keeps its pixel coordinates. Each terminal cell samples the
//! world at its centre, so the whole screen is always visible whatever the
//! terminal size.

use crate::game::{PipePiece, Session, WingPose};
use crate::ui::game_common::{create_game_layout, render_status_bar};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What a single cell of the play field shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCell {
    Sky,
    Bird(WingPose),
    Pipe(PipePiece),
}

const CONTROLS: [(&str, &str); 3] = [
    ("[Space/Up/Enter/Click]", "Jump"),
    ("[P]", "Pause"),
    ("[Esc]", "Quit"),
];

/// Draw one frame. `elapsed_ms` drives the wing animation only.
pub fn render_game(frame: &mut Frame, session: &Session, elapsed_ms: u64) {
    let area = frame.size();
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan);
    render_play_field(frame, layout.content, session, elapsed_ms);
    render_status_bar(
        frame,
        layout.status_bar,
        &format!("Score: {}", session.score()),
        Color::Green,
        &CONTROLS,
    );
}

fn render_play_field(frame: &mut Frame, area: Rect, session: &Session, elapsed_ms: u64) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let pose = WingPose::at(elapsed_ms, session.config().wing_flap_period_ms);
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    let cell = cell_at(session, col, row, area.width, area.height, pose);
                    let (glyph, style) = cell_style(cell);
                    Span::styled(glyph, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);

    // Score sits one pipe piece below the top edge, centred
    let row = score_row(session, area.height);
    if row < area.height {
        let score = Paragraph::new(Span::styled(
            session.score().to_string(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(
            score,
            Rect {
                y: area.y + row,
                height: 1,
                ..area
            },
        );
    }
}

fn cell_style(cell: SceneCell) -> (&'static str, Style) {
    let sky = Style::default().bg(Color::Blue);
    match cell {
        SceneCell::Sky => (" ", sky),
        SceneCell::Bird(WingPose::Up) => ("▀", sky.fg(Color::Yellow)),
        SceneCell::Bird(WingPose::Down) => ("▄", sky.fg(Color::Yellow)),
        SceneCell::Pipe(PipePiece::Body) => ("█", Style::default().fg(Color::Green)),
        SceneCell::Pipe(PipePiece::EndCap) => ("▓", Style::default().fg(Color::LightGreen)),
    }
}

/// Sample the world at the centre of cell (`col`, `row`) of a
/// `width` x `height` play field. The bird is drawn over pipes.
pub fn cell_at(
    session: &Session,
    col: u16,
    row: u16,
    width: u16,
    height: u16,
    pose: WingPose,
) -> SceneCell {
    let config = session.config();
    let wx = (col as f64 + 0.5) * config.screen_width as f64 / width.max(1) as f64;
    let wy = (row as f64 + 0.5) * config.screen_height as f64 / height.max(1) as f64;

    if session.bird.bounds(config).contains_point(wx, wy) {
        return SceneCell::Bird(pose);
    }
    session
        .pipes
        .iter()
        .filter(|p| wx >= p.x && wx < p.right_edge(config))
        .find_map(|p| p.piece_at(wy, config))
        .map(SceneCell::Pipe)
        .unwrap_or(SceneCell::Sky)
}

fn score_row(session: &Session, height: u16) -> u16 {
    let config = session.config();
    (config.pipe_piece_height as f64 * height as f64 / config.screen_height as f64) as u16
}
