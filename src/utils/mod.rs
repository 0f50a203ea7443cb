//! Utilities Module
//!
//! Logging and configuration shared by the library and the CLI.

pub mod config;
pub mod logging;

pub use config::{OutputEncoding, SignerSettings};
