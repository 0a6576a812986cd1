//! # Stemulator Core
//!
//! The predator/prey evolution engine behind the Stemulator science labs.
//!
//! This crate contains:
//! - Population construction with environment bias
//! - The survival, reproduction and statistics passes of a generation
//! - The keyword interpreter that maps lab setup text to settings
//! - Engine configuration, metrics and logging setup
//!
//! ## Example
//!
//! ```
//! use stemulator_core::{EngineConfig, SimulationEngine};
//!
//! let mut engine = SimulationEngine::new(EngineConfig::default().with_seed(7)).unwrap();
//! let report = engine.run_generation();
//! assert_eq!(report.generation, 1);
//! assert_eq!(engine.state().organisms.len(), report.survivors);
//! ```

/// Engine configuration loaded from `config.toml`
pub mod config;
/// The simulation engine and its lifecycle operations
pub mod engine;
/// Lab setup text interpretation
pub mod interpreter;
/// Run counters and logging setup
pub mod metrics;
/// Population construction and environment bias
pub mod population;
/// Asexual reproduction and trait mutation
pub mod reproduction;
/// Generation statistics
pub mod stats;
/// Survival probability and the survival pass
pub mod survival;

pub use config::EngineConfig;
pub use engine::SimulationEngine;
pub use interpreter::{interpret_lab, LabDirectives};
pub use metrics::{init_logging, Metrics};
