//! Application module
//!
//! Core architecture of the TUI:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//!
//! Side effects (network fetches, notifications) happen in the event
//! loop, which observes semantic actions and the state the reducer
//! produced.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::Action;
pub use reducer::{map_key, reduce};
pub use state::{AppState, Toast};
