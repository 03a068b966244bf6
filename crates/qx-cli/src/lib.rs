//! QX command-line front end
//!
//! The `qx` binary loads one matrix workbook per invocation and answers a
//! single query against it. Command construction and execution live here so
//! they can be tested without spawning the binary.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;

pub use commands::OutputFormat;
pub use config::{AnalyzerConfig, ConfigError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
