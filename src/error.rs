//! Error types for level selection and configuration loading.
//!
//! Nothing in the game loop is fatal: callers recover from a [`LevelError`]
//! by falling back to the standard level, and from a [`ConfigError`] by using
//! the built-in defaults.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    #[error("unsupported card count {cards} (expected 16 or 20)")]
    Unsupported { cards: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must have exactly {expected} distinct symbols, found {found}")]
    SymbolCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field} must be positive")]
    NonPositive { field: &'static str },
}
