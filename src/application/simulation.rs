use std::time::Duration;

use tracing::{debug, info};

use super::Settings;
use super::settings::{MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::domain::{LifeEngine, LifeError};

/// Simulation drives a [`LifeEngine`] on a repeating, cancellable tick.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    engine: LifeEngine,
    pub is_running: bool,
    pub generation: u64,
    interval: Duration,
    /// Time accumulated toward the next pending tick
    elapsed: Duration,
    probability: f64,
}

impl Simulation {
    /// Create a stopped simulation with an empty board sized from `settings`
    pub fn new(settings: &Settings) -> Result<Self, LifeError> {
        settings.validate()?;
        Ok(Self {
            engine: LifeEngine::new(settings.rows(), settings.cols())?,
            is_running: false,
            generation: 0,
            interval: settings.interval(),
            elapsed: Duration::ZERO,
            probability: settings.probability,
        })
    }

    pub const fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval.as_millis() as u64
    }

    pub fn set_interval_ms(&mut self, ms: u64) -> Result<(), LifeError> {
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&ms) {
            return Err(LifeError::InvalidArgument {
                name: "interval",
                value: ms as f64,
            });
        }
        self.interval = Duration::from_millis(ms);
        info!(interval_ms = ms, "tick interval set");
        Ok(())
    }

    /// Nudge the interval by `delta_ms`, clamped to the allowed range
    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let ms = self
            .interval_ms()
            .saturating_add_signed(delta_ms)
            .clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        if ms != self.interval_ms() {
            self.interval = Duration::from_millis(ms);
            info!(interval_ms = ms, "tick interval adjusted");
        }
    }

    /// Start ticking. The first generation is produced right away.
    pub fn run(&mut self) {
        if self.is_running {
            return;
        }
        self.is_running = true;
        self.elapsed = Duration::ZERO;
        info!(generation = self.generation, "simulation started");
        self.step();
    }

    /// Stop ticking and drop the pending tick; no step happens until `run`.
    pub fn stop(&mut self) {
        if !self.is_running {
            return;
        }
        self.is_running = false;
        self.elapsed = Duration::ZERO;
        info!(generation = self.generation, "simulation stopped");
    }

    pub fn toggle_running(&mut self) {
        if self.is_running {
            self.stop();
        } else {
            self.run();
        }
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        self.engine.step();
        self.generation += 1;
    }

    /// Feed elapsed frame time. Returns true when a generation was produced.
    /// At most one generation is produced per call.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.is_running {
            return false;
        }

        self.elapsed += delta;
        if self.elapsed < self.interval {
            return false;
        }

        self.step();
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        self.engine.toggle_cell(x, y)
    }

    /// Clear the board and reset the generation counter. Ticking continues.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.generation = 0;
    }

    /// Re-seed the board and reset the generation counter. Ticking continues.
    pub fn randomize(&mut self) -> Result<(), LifeError> {
        self.engine.randomize(self.probability)?;
        self.generation = 0;
        debug!(probability = self.probability, "board randomized");
        Ok(())
    }
}
