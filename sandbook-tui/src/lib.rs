//! sandbook-tui library
//!
//! Exports types and modules for testing and potential reuse.

pub mod app;
pub mod error;
pub mod services;
pub mod swipe;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{map_key, reduce, Action, AppState};
pub use error::{Result, TuiError};
pub use swipe::{SwipeDetector, SwipeDirection};
