//! Swipe gesture detection
//!
//! Converts a sequence of horizontal positions into a discrete swipe
//! event once the displacement threshold is crossed. Positions come
//! from mouse down/drag events in the terminal; the detector itself
//! is unit-agnostic.

/// Default displacement threshold.
pub const DEFAULT_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Tracks one in-flight gesture.
///
/// Both positions reset to `None` when the gesture ends, whatever the
/// outcome. `end` with either position missing is a no-op: "no
/// gesture" is distinct from a zero-length gesture, so a tap never
/// fires even at position zero. No input can make this panic.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold: f64,
    start_x: Option<f64>,
    current_x: Option<f64>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl SwipeDetector {
    /// Negative thresholds clamp to zero.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            start_x: None,
            current_x: None,
        }
    }

    /// Start a gesture, clearing any prior end position.
    pub fn begin(&mut self, x: f64) {
        self.current_x = None;
        self.start_x = Some(x);
    }

    /// Record the latest position. No-op unless a gesture is active.
    pub fn update(&mut self, x: f64) {
        if self.start_x.is_some() {
            self.current_x = Some(x);
        }
    }

    /// Finish the gesture and classify it.
    ///
    /// Fires `Left` when the drag moved more than `threshold` to the
    /// left, `Right` for the mirror case, nothing otherwise.
    pub fn end(&mut self) -> Option<SwipeDirection> {
        let result = match (self.start_x, self.current_x) {
            (Some(start), Some(current)) => {
                let distance = start - current;
                if distance > self.threshold {
                    Some(SwipeDirection::Left)
                } else if distance < -self.threshold {
                    Some(SwipeDirection::Right)
                } else {
                    None
                }
            }
            _ => None,
        };

        self.start_x = None;
        self.current_x = None;
        result
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
