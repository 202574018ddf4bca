//! Application state
//!
//! Single source of truth for the TUI. All transitions happen through
//! the reducer (see `reducer.rs`).

use libsandbook::notify::Level;
use libsandbook::{Article, History, UiConfig};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// The article being displayed or loaded
    pub article: Option<Article>,

    /// A navigation is in flight
    pub is_loading: bool,

    /// Error from the last failed navigation attempt
    pub error: Option<String>,

    /// Visited titles with cursor
    pub history: History,

    /// Navigation generation; completions from older generations are
    /// discarded
    pub generation: u64,

    /// Content scroll offset, reset on every navigation
    pub scroll: u16,

    /// Transient notification
    pub toast: Option<Toast>,

    /// Help overlay visible?
    pub help_visible: bool,

    /// UI configuration
    pub config: UiConfig,
}

/// Transient notification with tick-based expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: Level,
    pub message: String,
    pub ticks_left: u16,
}

impl Toast {
    pub fn error(message: impl Into<String>, ticks: u16) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            ticks_left: ticks,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl AppState {
    pub fn new(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            article: None,
            is_loading: false,
            error: None,
            history: History::new(),
            generation: 0,
            scroll: 0,
            toast: None,
            help_visible: false,
            config,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }
}
