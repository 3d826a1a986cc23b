//! Runtime configuration for the demo binaries.

pub mod demo;

pub use demo::{load_config, DemoConfig, OutputConfig};
