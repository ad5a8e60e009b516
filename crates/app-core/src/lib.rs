//! Core application definitions for Todo Smart
//!
//! This crate contains the branding constants and the process-wide
//! application configuration shared by the UI and the application shell.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod config;

pub use config::{AppConfig, ConfigError, APP_NAME_VAR};
