// Settle animator - time-based tween toward a target offset
//
// The controller never steps its own animation: it only records a start
// value, a target value, and a duration here. The host event loop samples
// the tween once per frame tick and applies whatever value comes out. The
// final sample lands exactly on the target, so resting offsets are always
// page-aligned with no float drift.

use std::time::{Duration, Instant};

/// Easing curve applied to the normalized progress `t` in [0, 1].
#[allow(dead_code)] // full curve set - the deck only ever settles with ease-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseInQuad,
    /// Fast start, soft landing. The settle feel for released swipes.
    #[default]
    EaseOutQuad,
    EaseInOutQuad,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// One-shot tween from a start value to a target value over a fixed duration.
///
/// Inactive until `start()` is called; becomes inactive again once the
/// duration elapses (after handing out the exact target value one final time)
/// or when cancelled by a new drag taking over.
#[derive(Debug, Clone)]
pub struct SettleAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for SettleAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(250),
            easing: Easing::default(),
        }
    }
}

impl SettleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The value this tween is heading toward, if one is in flight.
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }

    /// Begin animating from `current` to `target` over `duration`.
    /// Restarting an in-flight tween is fine; the new one takes over.
    pub fn begin(&mut self, current: f32, target: f32, duration: Duration, easing: Easing) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Instant::now();
        self.duration = duration;
        self.easing = easing;
    }

    /// Sample the tween at the current wall-clock time.
    ///
    /// Returns `Some(value)` while animating (the last sample is exactly the
    /// target), `None` once finished or when no tween is active.
    pub fn tick(&mut self) -> Option<f32> {
        self.sample(Instant::now())
    }

    /// Sample the tween at an explicit instant. `tick()` delegates here;
    /// hosts with their own clock (and tests) call this directly.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * self.easing.apply(t))
    }

    /// Drop the current tween immediately, leaving the value wherever the
    /// last sample put it.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
