//! Notification capability
//!
//! The controller reports transient user-facing messages through an
//! injected notifier instead of ambient global wiring, which keeps it
//! testable. The TUI routes notifications into its toast state and a
//! tracing record; tests collect them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

pub trait Notifier {
    fn notify(&mut self, level: Level, message: &str);
}

/// Notifier that drops everything. For headless use.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _level: Level, _message: &str) {}
}

/// Notifier that records messages for later inspection.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    pub messages: Vec<(Level, String)>,
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}

/// Notifier that forwards to the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!(target: "sandbook::notify", "{message}"),
            Level::Error => tracing::warn!(target: "sandbook::notify", "{message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_notifier_collects_in_order() {
        let mut notifier = MemoryNotifier::default();
        notifier.notify(Level::Error, "fetch failed");
        notifier.notify(Level::Info, "loaded");

        assert_eq!(
            notifier.messages,
            vec![
                (Level::Error, "fetch failed".to_string()),
                (Level::Info, "loaded".to_string()),
            ]
        );
    }
}
