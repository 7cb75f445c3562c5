//! Shared utilities for pg-wait components
//!
//! This crate provides common functionality used by the readiness gate:
//! - Structured logging initialization
//! - Environment variable parsing helpers
//! - Command execution utilities

pub mod command;
pub mod config;
pub mod logging;

pub use command::{probe, run, CommandOutput};
pub use config::ConfigExt;
pub use logging::{init_logging, LogFormat};
