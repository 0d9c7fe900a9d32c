//! Crate-level error types.

use std::fmt;

/// Errors produced by the helica crate.
#[derive(Debug)]
pub enum HelicaError {
    /// Invalid configuration value (helix parameters, tube cross-section,
    /// base-pair stride, lighting keyframes).
    Config(String),
    /// Input geometry too degenerate to process.
    DegenerateGeometry(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for HelicaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::DegenerateGeometry(msg) => {
                write!(f, "degenerate geometry: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for HelicaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HelicaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
