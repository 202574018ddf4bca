//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions: user intents from
//! key and mouse handling, and fetch completions from the service
//! bridge. Completions carry the generation of the navigation that
//! started them; the reducer drops the stale ones.

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI events ===
    /// Periodic tick; drives toast expiry
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation intents ===
    /// Go to a new random article
    NewRandomRequested,

    /// Go back one history entry
    GoBackRequested,

    /// Open a specific exact title (initial `--title` load)
    OpenTitleRequested(String),

    // === Fetch completions ===
    /// Random-title resolution finished
    TitleResolved { generation: u64, title: String },

    /// Content arrived for the current navigation
    ContentLoaded { generation: u64, content: String },

    /// Random-title resolution failed; prior article stays untouched
    RandomFailed { generation: u64, message: String },

    /// Content fetch failed; the title stays visible, content clears
    ContentFailed { generation: u64, message: String },

    // === Scrolling ===
    ScrollUp(u16),
    ScrollDown(u16),

    // === Overlays ===
    ShowHelp,
    HideHelp,
    DismissError,
    DismissToast,

    /// Quit the application
    Quit,
}
