//! # Stemulator IO
//!
//! Boundary I/O for the Stemulator lab engine.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON serialization helpers
//! - Loading lab definitions supplied by the lab service
//! - Evidence CSV export and the feedback request payload

/// Error types and result aliases for I/O operations
pub mod error;
/// Evidence CSV export of a run's statistics
pub mod evidence;
/// Request payload for AI feedback on a lab part
pub mod guide;
/// Lab definitions loaded from JSON, plus the built-in sample lab
pub mod labs;
/// Validated serialization helpers for JSON
pub mod serialization;

pub use error::{IoError, Result};
pub use evidence::{evidence_csv_string, write_evidence_csv};
pub use guide::{GuidePayload, GuideRequest};
pub use labs::LabLibrary;
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty};
