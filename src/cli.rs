//! Command-line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "\
Flappy Bird - Terminal Edition

Usage: flappy [options]

Options:
  --config <path>  Load settings from a JSON file (default: ~/.flappy/config.json)
  --seed <n>       Seed the pipe generator for a reproducible game
  --version        Show version information
  --help           Show this help message

Controls:
  Space/Up/Enter/Click  Jump
  P/Pause               Pause or resume
  Esc/Q                 Quit";

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(PlayOptions),
    Version,
    Help,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayOptions {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Parse arguments, excluding the program name. `Err` carries a message
/// for stderr.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = PlayOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(Command::Play(options))
}
