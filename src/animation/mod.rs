mod timing;

pub use timing::TimingFunction;

use std::time::{Duration, Instant};

/// Configuration for animated scroll jumps
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for Transition {
    /// 260ms quadratic ease-out
    fn default() -> Self {
        Self::new(Duration::from_millis(260), TimingFunction::EaseOut)
    }
}

/// A tween of one axis' scroll offset.
///
/// The clock starts on the first [`sample`](Self::sample), so an animation
/// created from an input handler begins with the next frame.
#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    start_time: Option<Instant>,
    transition: Transition,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, transition: Transition) -> Self {
        Self {
            from,
            to,
            start_time: None,
            transition,
        }
    }

    /// Offset the animation is heading to
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Sample the animation at `now`. Returns the offset and whether the
    /// animation has reached its target.
    pub fn sample(&mut self, now: Instant) -> (f32, bool) {
        let start = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);
        let duration = self.transition.duration;
        if duration.is_zero() || elapsed >= duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / duration.as_secs_f32();
        let eased = self.transition.timing.evaluate(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}
