//! Error types for sandbook-tui
//!
//! Wraps core library errors and terminal/IO errors for unified
//! handling at the event-loop boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error
    #[error("{0}")]
    Core(#[from] libsandbook::SandbookError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event handling error
    #[error("Event error: {0}")]
    Event(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
