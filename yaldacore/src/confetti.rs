//! Falling-confetti animation for yaldaEdit
//!
//! A single repeating timer drives the animation: each tick shifts every
//! flake down by a fixed step, retires flakes that have fallen past the
//! bottom edge, and spawns one new flake at a random position along the top.
//!
//! The scheduler is two states: `Stopped` (no pending tick) and `Running`
//! (exactly one pending-tick deadline). `start` and `stop` are idempotent.
//! An epoch token is bumped on every `stop` so a tick that was already due
//! when `stop` ran cannot fire on a later `poll`.

use egui::Color32;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Delay between animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Vertical distance every flake falls per tick, in pixels.
pub const FALL_STEP: f32 = 2.0;

/// Flake diameter range in pixels.
const MIN_SIZE: f32 = 10.0;
const MAX_SIZE: f32 = 30.0;

/// Ticks fired per `poll` call are capped; if the loop stalled longer than
/// this we re-anchor instead of bursting to catch up.
const MAX_TICKS_PER_POLL: u32 = 8;

/// The fixed flake palette: red, green, blue, orange, purple.
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(255, 165, 0),
    Color32::from_rgb(128, 0, 128),
];

/// One decorative shape on the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flake {
    /// Left edge of the bounding box.
    pub x: f32,
    /// Top edge of the bounding box.
    pub y: f32,
    /// Bounding-box side length (flakes are drawn as filled circles).
    pub size: f32,
    pub color: Color32,
}

/// Token for a scheduled-but-not-yet-fired tick.
/// Present iff the scheduler is running.
#[derive(Debug, Clone, Copy)]
struct PendingTick {
    due: Instant,
    epoch: u64,
}

pub struct ConfettiScheduler {
    flakes: Vec<Flake>,
    pending: Option<PendingTick>,
    /// Bumped on every `stop` so stale pending ticks are discarded.
    epoch: u64,
    rng: StdRng,
}

impl Default for ConfettiScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfettiScheduler {
    pub fn new() -> Self {
        Self {
            flakes: Vec::new(),
            pending: None,
            epoch: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic scheduler for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    /// Schedule the first tick. No-op while already running, so at most one
    /// pending tick exists at any time.
    pub fn start(&mut self, now: Instant) {
        if self.pending.is_none() {
            self.pending = Some(PendingTick {
                due: now + TICK_INTERVAL,
                epoch: self.epoch,
            });
        }
    }

    /// Cancel the pending tick. No-op while already stopped. Flakes already
    /// on screen stay where they are, frozen.
    pub fn stop(&mut self) {
        if self.pending.is_some() {
            self.pending = None;
            self.epoch += 1;
        }
    }

    /// Fire any due ticks. Called every frame by the shell with the current
    /// time and the window size. Returns `true` when at least one tick fired
    /// and the overlay needs repainting.
    pub fn poll(&mut self, now: Instant, width: f32, height: f32) -> bool {
        let mut fired = 0u32;
        while let Some(tick) = self.pending {
            if tick.epoch != self.epoch {
                // Stale handle from before the last stop.
                self.pending = None;
                break;
            }
            if now < tick.due {
                break;
            }
            if fired >= MAX_TICKS_PER_POLL {
                // Fell too far behind; re-anchor rather than burst.
                self.pending = Some(PendingTick {
                    due: now + TICK_INTERVAL,
                    epoch: self.epoch,
                });
                break;
            }
            self.tick(width, height);
            self.pending = Some(PendingTick {
                due: tick.due + TICK_INTERVAL,
                epoch: self.epoch,
            });
            fired += 1;
        }
        fired > 0
    }

    /// One animation step: shift existing flakes, retire the ones past the
    /// bottom edge, then spawn a new flake along the top.
    fn tick(&mut self, width: f32, height: f32) {
        for flake in &mut self.flakes {
            flake.y += FALL_STEP;
        }
        self.flakes.retain(|f| f.y <= height);

        let x = self.rng.gen_range(0.0..width.max(1.0));
        let size = self.rng.gen_range(MIN_SIZE..=MAX_SIZE);
        let color = PALETTE[self.rng.gen_range(0..PALETTE.len())];
        self.flakes.push(Flake { x, y: 0.0, size, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn at(t0: Instant, n: u32) -> Instant {
        t0 + TICK_INTERVAL * n
    }

    #[test]
    fn test_stopped_poll_is_inert() {
        let mut c = ConfettiScheduler::with_seed(1);
        let t0 = Instant::now();
        assert!(!c.poll(at(t0, 5), W, H));
        assert!(c.flakes().is_empty());
        assert!(!c.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut c = ConfettiScheduler::with_seed(1);
        let t0 = Instant::now();
        c.start(t0);
        c.start(t0);
        assert!(c.is_running());
        // Exactly one pending tick: the first deadline fires one flake.
        assert!(c.poll(at(t0, 1), W, H));
        assert_eq!(c.flakes().len(), 1);
    }

    #[test]
    fn test_stop_when_stopped_is_noop() {
        let mut c = ConfettiScheduler::with_seed(1);
        c.stop();
        c.stop();
        assert!(!c.is_running());
    }

    #[test]
    fn test_one_flake_per_tick_and_fixed_shift() {
        let mut c = ConfettiScheduler::with_seed(42);
        let t0 = Instant::now();
        c.start(t0);
        for n in 1..=5 {
            c.poll(at(t0, n), W, H);
            assert_eq!(c.flakes().len(), n as usize);
        }
        // First flake was spawned at tick 1 and shifted on ticks 2..=5.
        assert_eq!(c.flakes()[0].y, 4.0 * FALL_STEP);
        // Newest flake has not been shifted yet.
        assert_eq!(c.flakes().last().map(|f| f.y), Some(0.0));
    }

    #[test]
    fn test_flakes_retire_past_bottom_edge() {
        let mut c = ConfettiScheduler::with_seed(7);
        let t0 = Instant::now();
        c.start(t0);
        // Height of 4px: a flake survives at y=2 and y=4, leaves at y=6.
        c.poll(at(t0, 1), W, 4.0);
        c.poll(at(t0, 2), W, 4.0);
        c.poll(at(t0, 3), W, 4.0);
        assert_eq!(c.flakes().len(), 3);
        c.poll(at(t0, 4), W, 4.0);
        // Tick 4 would move the first flake to y=6 > 4: retired.
        assert_eq!(c.flakes().len(), 3);
        assert!(c.flakes().iter().all(|f| f.y <= 4.0));
    }

    #[test]
    fn test_stop_cancels_due_tick() {
        let mut c = ConfettiScheduler::with_seed(9);
        let t0 = Instant::now();
        c.start(t0);
        c.stop();
        // The first tick is long since due, but the epoch changed.
        assert!(!c.poll(at(t0, 10), W, H));
        assert!(c.flakes().is_empty());
        assert!(!c.is_running());
    }

    #[test]
    fn test_restart_after_stop() {
        let mut c = ConfettiScheduler::with_seed(9);
        let t0 = Instant::now();
        c.start(t0);
        c.poll(at(t0, 1), W, H);
        c.stop();
        let frozen = c.flakes().to_vec();
        c.start(at(t0, 2));
        assert!(c.is_running());
        // Flakes stayed frozen through the stop.
        assert_eq!(c.flakes(), &frozen[..]);
        c.poll(at(t0, 3), W, H);
        assert_eq!(c.flakes().len(), 2);
    }

    #[test]
    fn test_spawn_within_bounds_and_palette() {
        let mut c = ConfettiScheduler::with_seed(1234);
        let t0 = Instant::now();
        c.start(t0);
        for n in 1..=50 {
            c.poll(at(t0, n), W, H);
        }
        for flake in c.flakes() {
            assert!(flake.x >= 0.0 && flake.x < W);
            assert!(flake.size >= MIN_SIZE && flake.size <= MAX_SIZE);
            assert!(PALETTE.contains(&flake.color));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let t0 = Instant::now();
        let mut a = ConfettiScheduler::with_seed(5);
        let mut b = ConfettiScheduler::with_seed(5);
        a.start(t0);
        b.start(t0);
        for n in 1..=10 {
            a.poll(at(t0, n), W, H);
            b.poll(at(t0, n), W, H);
        }
        assert_eq!(a.flakes(), b.flakes());
    }

    #[test]
    fn test_stall_reanchors_instead_of_bursting() {
        let mut c = ConfettiScheduler::with_seed(3);
        let t0 = Instant::now();
        c.start(t0);
        // 100 intervals late: fires the cap, then re-anchors.
        c.poll(at(t0, 100), W, H);
        assert_eq!(c.flakes().len(), MAX_TICKS_PER_POLL as usize);
        assert!(c.is_running());
    }
}
