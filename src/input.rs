//! Terminal input: crossterm events to game events.

use crate::game::GameEvent;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

/// Map one terminal event to a game event, if it means anything to the game.
pub fn map_event(event: &Event) -> Option<GameEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Up(MouseButton::Left) => Some(GameEvent::Jump),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<GameEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameEvent::Quit),
        KeyCode::Pause | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GameEvent::TogglePause)
        }
        KeyCode::Up | KeyCode::Enter | KeyCode::Char(' ') => Some(GameEvent::Jump),
        _ => None,
    }
}

/// Drain every pending terminal event without blocking, in arrival order.
pub fn drain_events() -> io::Result<Vec<GameEvent>> {
    let mut events = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(e) = map_event(&event::read()?) {
            events.push(e);
        }
    }
    Ok(events)
}
