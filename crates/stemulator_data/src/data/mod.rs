//! Core data structures for the Stemulator evolution lab.

pub mod lab;
pub mod organism;
pub mod settings;
pub mod state;
