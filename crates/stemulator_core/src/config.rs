//! Configuration management for the simulation engine.
//!
//! Strongly-typed structures that map to `config.toml`. Every section has a
//! `Default`, so a file only needs to name what it overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! seed = 42
//!
//! [population]
//! initial_population = 50
//! prey_fraction = 0.85
//!
//! [defaults]
//! environment = "arctic"
//! mutation_rate = 3
//!
//! [log]
//! capacity = 200
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stemulator_data::Settings;
use std::path::Path;

/// Population size, composition and arena geometry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PopulationConfig {
    pub initial_population: usize,
    pub prey_fraction: f64,
    pub arena_width: f64,
    pub arena_height: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            initial_population: 50,
            prey_fraction: 0.85,
            arena_width: 800.0,
            arena_height: 600.0,
        }
    }
}

impl PopulationConfig {
    /// Number of prey in a freshly built population of `count`.
    #[must_use]
    pub fn prey_count(&self, count: usize) -> usize {
        (count as f64 * self.prey_fraction).floor() as usize
    }
}

/// Audit log sizing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Entries kept before the oldest is evicted.
    pub capacity: usize,
    /// Entries exposed through a snapshot.
    pub snapshot_actions: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            snapshot_actions: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the engine RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub population: PopulationConfig,
    /// Settings installed by `initialize` and `reset`.
    pub defaults: Settings,
    pub log: LogConfig,
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content).context("invalid engine config")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to load {}", path.display()))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Validates all configuration parameters.
    ///
    /// Returns the first failing rule as an error.
    pub fn validate(&self) -> anyhow::Result<()> {
        let pop = &self.population;
        anyhow::ensure!(
            pop.initial_population <= 10000,
            "Initial population too large (max 10000)"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&pop.prey_fraction),
            "Prey fraction must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            pop.arena_width > 0.0 && pop.arena_width.is_finite(),
            "Arena width must be positive"
        );
        anyhow::ensure!(
            pop.arena_height > 0.0 && pop.arena_height.is_finite(),
            "Arena height must be positive"
        );
        anyhow::ensure!(
            self.defaults.mutation_rate <= Settings::MAX_MUTATION_RATE,
            "Default mutation rate must be in [0, 10]"
        );
        anyhow::ensure!(
            self.log.snapshot_actions >= 1,
            "Snapshot must expose at least one action"
        );
        anyhow::ensure!(
            self.log.capacity >= self.log.snapshot_actions,
            "Log capacity must be at least the snapshot size"
        );
        Ok(())
    }
}
