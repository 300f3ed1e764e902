use std::time::Duration;

/// Configuration for the `max-height` transition of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A running height transition, timed against the scheduler clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ActiveTransition {
    pub from: u32,
    pub to: u32,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl ActiveTransition {
    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }

    /// Interpolated value at `now`. Clamps to the end value once finished.
    pub fn value_at(&self, now: Duration) -> u32 {
        let elapsed = now.saturating_sub(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        lerp_u32(self.from, self.to, self.easing.apply(progress))
    }
}

/// Linear interpolation for u32 values.
fn lerp_u32(from: u32, to: u32, t: f32) -> u32 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round().max(0.0) as u32
}
