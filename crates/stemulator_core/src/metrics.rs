//! Run metrics and logging setup.
//!
//! Provides structured logging and counters for monitoring a session.

use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters kept by one engine.
#[derive(Debug, Clone)]
pub struct Metrics {
    generations: u64,
    extinctions: u64,
    labs_applied: u64,
    last_generation: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: 0,
            extinctions: 0,
            labs_applied: 0,
            last_generation: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation with its duration.
    pub fn record_generation(&mut self, duration: Duration, population: usize, extinct: bool) {
        self.generations += 1;
        self.last_generation = duration;
        if extinct {
            self.extinctions += 1;
        }

        tracing::debug!(
            generations = self.generations,
            population = population,
            duration_us = duration.as_micros() as u64,
            "Generation timing"
        );
    }

    pub fn record_lab_applied(&mut self) {
        self.labs_applied += 1;
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Generations that ended with an empty population.
    #[must_use]
    pub fn extinctions(&self) -> u64 {
        self.extinctions
    }

    #[must_use]
    pub fn labs_applied(&self) -> u64 {
        self.labs_applied
    }

    #[must_use]
    pub fn last_generation(&self) -> Duration {
        self.last_generation
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
