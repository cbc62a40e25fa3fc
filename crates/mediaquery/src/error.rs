//! Error types.
//!
//! Classification itself never fails. These cover the edges: parsing
//! user-supplied hints and configuration, and terminal I/O in hosts.

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced while configuring or hosting a classifier.
#[derive(Error, Diagnostic, Debug)]
pub enum MediaQueryError {
    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("Unknown device category '{value}'")]
    #[diagnostic(
        code(mediaquery::parse::unknown_device),
        help("Expected one of: mobile, tablet, desktop, smarttv")
    )]
    UnknownDevice { value: String },

    #[error("Unknown environment mode '{value}'")]
    #[diagnostic(
        code(mediaquery::parse::unknown_environment),
        help("Expected one of: interactive, headless, auto")
    )]
    UnknownEnvironment { value: String },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid value '{value}' for {key}: {reason}")]
    #[diagnostic(code(mediaquery::config::invalid_value))]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },

    // =========================================================================
    // Host Errors
    // =========================================================================
    #[error("Failed to query the viewport: {0}")]
    #[diagnostic(code(mediaquery::host::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MediaQueryError>;
