//! Support code for the SBVR to OWL client binaries: settings resolution,
//! interactive prompts and logging setup.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod logging;
pub mod prompt;

pub use config::{ConfigError, FileConfig, Overrides, Settings};
