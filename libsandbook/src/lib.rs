//! Sandbook core library
//!
//! Client, configuration, and navigation state for the Sandbook
//! terminal Wikipedia reader. The TUI crate sits on top of this;
//! everything here is UI-agnostic.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod notify;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use client::WikiClient;
pub use config::{ApiConfig, Config, UiConfig};
pub use error::{ClientError, Result, SandbookError};
pub use navigation::History;
pub use types::{Article, ContentMode};
