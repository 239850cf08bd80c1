//! Repaint governor for the egui event loop.
//!
//! egui redraws only when something asks it to. The confetti animation
//! needs timed repaints while it runs, and nothing should keep the loop
//! spinning once it stops. `RepaintController` owns that decision: apps
//! flip `set_continuous` when an animation starts or stops, call
//! `mark_needs_repaint` when state changed outside an input event, and
//! call `end_frame` at the bottom of `update()`.

use std::time::Duration;

/// Repaint interval for idle timed updates.
const DEFAULT_REPAINT_INTERVAL: Duration = Duration::from_millis(250);

/// Repaint interval while an animation is running (~30 fps, comfortably
/// under the 100 ms confetti tick).
const FAST_REPAINT_INTERVAL: Duration = Duration::from_millis(33);

pub struct RepaintController {
    /// Whether continuous (timed) repainting is active.
    continuous: bool,
    /// Whether a one-shot repaint has been requested.
    needs_repaint: bool,
    /// Repaint interval when continuous is active.
    interval: Duration,
}

impl Default for RepaintController {
    fn default() -> Self {
        Self::new()
    }
}

impl RepaintController {
    pub fn new() -> Self {
        Self {
            continuous: false,
            needs_repaint: false,
            interval: DEFAULT_REPAINT_INTERVAL,
        }
    }

    /// Controller with the animation-rate interval.
    pub fn with_fast_interval() -> Self {
        Self {
            interval: FAST_REPAINT_INTERVAL,
            ..Self::new()
        }
    }

    /// Enable or disable continuous (timed) repainting.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Request a single repaint on the next opportunity. Call when internal
    /// state changed outside of user input (e.g. a timer tick fired).
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Call at the end of `update()`. Schedules the next repaint:
    /// continuous mode repaints after the configured interval, a pending
    /// one-shot request repaints immediately, otherwise egui sleeps until
    /// the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.continuous {
            ctx.request_repaint_after(self.interval);
        } else if self.needs_repaint {
            ctx.request_repaint();
        }
        self.needs_repaint = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_toggle() {
        let mut rc = RepaintController::new();
        assert!(!rc.is_continuous());
        rc.set_continuous(true);
        assert!(rc.is_continuous());
        rc.set_continuous(false);
        assert!(!rc.is_continuous());
    }

    #[test]
    fn test_one_shot_request_is_consumed() {
        let mut rc = RepaintController::with_fast_interval();
        let ctx = egui::Context::default();
        rc.mark_needs_repaint();
        rc.end_frame(&ctx);
        assert!(!rc.needs_repaint);
    }
}
