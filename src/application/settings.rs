use std::time::Duration;

use clap::Parser;

use crate::domain::{DEFAULT_PROBABILITY, LifeError};

pub const MIN_INTERVAL_MS: u64 = 1;
pub const MAX_INTERVAL_MS: u64 = 10_000;

/// Command-line and environment overrides for the board and timing.
#[derive(Parser, Debug)]
#[command(name = "life_engine", about = "Conway's Game of Life on a bounded board")]
pub struct Args {
    /// Cell edge length in pixels.
    #[arg(long, env = "LIFE_CELL_SIZE", default_value_t = 20.0, value_parser = parse_cell_size)]
    pub cell_size: f32,

    /// Milliseconds between generations while running.
    #[arg(
        long,
        env = "LIFE_INTERVAL_MS",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(MIN_INTERVAL_MS..=MAX_INTERVAL_MS)
    )]
    pub interval_ms: u64,

    /// Chance of a cell starting alive when randomizing.
    #[arg(long, env = "LIFE_PROBABILITY", default_value_t = DEFAULT_PROBABILITY, value_parser = parse_probability)]
    pub probability: f64,
}

fn parse_cell_size(raw: &str) -> Result<f32, String> {
    let size: f32 = raw.parse().map_err(|err| format!("`{raw}` is not a number: {err}"))?;
    if size >= 1.0 {
        Ok(size)
    } else {
        Err(format!("`{raw}` must be at least 1"))
    }
}

fn parse_probability(raw: &str) -> Result<f64, String> {
    let p: f64 = raw.parse().map_err(|err| format!("`{raw}` is not a number: {err}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("`{raw}` is not within 0..=1"))
    }
}

/// Board and timing defaults: an 800x600 board of 20px cells, 100ms ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub board_width: f32,
    pub board_height: f32,
    pub cell_size: f32,
    pub interval_ms: u64,
    pub probability: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: 800.0,
            board_height: 600.0,
            cell_size: 20.0,
            interval_ms: 100,
            probability: DEFAULT_PROBABILITY,
        }
    }
}

impl Settings {
    /// Parse the process arguments and `LIFE_*` variables. Clap prints the
    /// offending value and exits on malformed input.
    pub fn load() -> Result<Self, LifeError> {
        Self::from_args(&Args::parse())
    }

    pub fn from_args(args: &Args) -> Result<Self, LifeError> {
        let settings = Self {
            cell_size: args.cell_size,
            interval_ms: args.interval_ms,
            probability: args.probability,
            ..Self::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), LifeError> {
        if !(self.cell_size >= 1.0 && self.cell_size <= self.board_width.min(self.board_height)) {
            return Err(LifeError::InvalidArgument {
                name: "cell size",
                value: f64::from(self.cell_size),
            });
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(LifeError::InvalidArgument {
                name: "probability",
                value: self.probability,
            });
        }
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.interval_ms) {
            return Err(LifeError::InvalidArgument {
                name: "interval",
                value: self.interval_ms as f64,
            });
        }
        Ok(())
    }

    /// Number of whole cells that fit across the board
    pub fn cols(&self) -> usize {
        (self.board_width / self.cell_size) as usize
    }

    /// Number of whole cells that fit down the board
    pub fn rows(&self) -> usize {
        (self.board_height / self.cell_size) as usize
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
