//! Core application primitives (orchestrators)

pub mod orchestrator;

pub use orchestrator::*;
