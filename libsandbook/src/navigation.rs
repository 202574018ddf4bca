//! Navigation history
//!
//! An ordered list of visited titles with a cursor. The entry under
//! the cursor is always the title being loaded or displayed. Content
//! is never cached here; going back hands the title back to the
//! caller for a fresh fetch.

/// Visited titles plus a cursor into them.
///
/// Invariant: `index < entries.len()` whenever `entries` is
/// non-empty. Upheld by construction; there is no way to move the
/// cursor out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title under the cursor, if any.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Record a forward navigation.
    ///
    /// Entries past the cursor are discarded first, so navigating
    /// after going back drops the forward branch (the browser
    /// back-then-navigate truncation rule).
    pub fn navigate_to(&mut self, title: impl Into<String>) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(title.into());
        self.index = self.entries.len() - 1;
    }

    /// Move the cursor back one entry and return the title to
    /// re-fetch. No-op returning `None` at the start of history.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        self.current()
    }

    /// Titles in visit order, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
