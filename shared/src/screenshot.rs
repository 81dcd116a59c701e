use crate::constants::{SCREENSHOT_SECS, SCREENSHOT_URGENT_SECS};

/// Display state of the screenshot-opportunity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenshotPhase {
    Active(i64),
    Urgent(i64),
    Expired,
}

/// Bounded countdown measured from the moment the result was first
/// revealed. Independent of the spin lock: it only gates the
/// "capture your result" affordance, never the spin itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenshotCountdown {
    start: i64,
    total_secs: i64,
}

impl ScreenshotCountdown {
    pub fn new(start: i64) -> Self {
        Self::with_duration(start, SCREENSHOT_SECS)
    }

    pub fn with_duration(start: i64, total_secs: i64) -> Self {
        Self { start, total_secs }
    }

    /// Whole seconds left, possibly negative once expired.
    pub fn remaining(&self, now: i64) -> i64 {
        self.total_secs - (now - self.start) / 1000
    }

    pub fn phase(&self, now: i64) -> ScreenshotPhase {
        let remaining = self.remaining(now);
        if remaining <= 0 {
            ScreenshotPhase::Expired
        } else if remaining <= SCREENSHOT_URGENT_SECS {
            ScreenshotPhase::Urgent(remaining)
        } else {
            ScreenshotPhase::Active(remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window_at_reveal() {
        let countdown = ScreenshotCountdown::new(1_000);
        assert_eq!(countdown.phase(1_000), ScreenshotPhase::Active(60));
    }

    #[test]
    fn test_expired_immediately_when_revealed_late() {
        // Revealed 70s after the window opened: no negative countdown.
        let countdown = ScreenshotCountdown::new(0);
        assert_eq!(countdown.phase(70_000), ScreenshotPhase::Expired);
    }

    #[test]
    fn test_urgent_in_final_ten_seconds() {
        let countdown = ScreenshotCountdown::new(0);
        assert_eq!(countdown.phase(49_999), ScreenshotPhase::Active(11));
        assert_eq!(countdown.phase(50_000), ScreenshotPhase::Urgent(10));
        assert_eq!(countdown.phase(59_000), ScreenshotPhase::Urgent(1));
        assert_eq!(countdown.phase(60_000), ScreenshotPhase::Expired);
    }
}
