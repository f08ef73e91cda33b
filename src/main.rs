use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::cli::{self, Command, PlayOptions};
use flappy::core::config::load_config;
use flappy::core::timing::FrameClock;
use flappy::utils::{init_logging, version_string};
use flappy::{input, ui, GameError, Session};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Version) => {
            println!("{}", version_string());
            return;
        }
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            return;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    match play(options) {
        Ok(score) => println!("Game over! Score: {}", score),
        Err(e) => {
            eprintln!("flappy: {}", e);
            std::process::exit(1);
        }
    }
}

/// Validate the config, run one session and return the final score. The
/// terminal is restored before returning, whatever happened.
fn play(options: PlayOptions) -> Result<u32, GameError> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = load_config(options.config.as_deref())?;
    if let Err(e) = config.validate() {
        error!("Rejected config: {}", e);
        return Err(e.into());
    }
    info!(
        "Starting {}x{} at {} fps",
        config.screen_width, config.screen_height, config.fps
    );
    debug!("Config: {:?}", config);

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, Session::new(config), rng);
    restore_terminal(&mut terminal)?;
    result
}

fn run(terminal: &mut Term, mut session: Session, mut rng: StdRng) -> Result<u32, GameError> {
    let mut clock = FrameClock::new(session.config().fps);
    loop {
        clock.tick();
        let events = input::drain_events()?;
        let result = session.tick(events, &mut rng);
        if result.ended.is_some() {
            return Ok(session.score());
        }
        if result.render {
            let elapsed_ms = clock.elapsed_ms();
            terminal.draw(|frame| ui::render_game(frame, &session, elapsed_ms))?;
        }
    }
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}
