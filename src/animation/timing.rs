//! Easing curves for animated scroll jumps.
//!
//! Curves are quadratic and can be named by keyword (`linear`, `quad:in`,
//! `quad:out`, `quad:in:out`), so a container can pick one through its data
//! attributes.

use std::fmt;
use std::sync::Arc;

/// Maps linear progress `t` in `[0, 1]` to eased progress
#[derive(Clone)]
pub enum TimingFunction {
    Linear,
    /// Quadratic acceleration
    EaseIn,
    /// Quadratic deceleration
    EaseOut,
    /// Accelerates to the midpoint, then decelerates
    EaseInOut,
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the curve at progress `t`, clamped to `0.0..=1.0`
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut if t < 0.5 => 2.0 * t * t,
            TimingFunction::EaseInOut => -1.0 + (4.0 - 2.0 * t) * t,
            TimingFunction::Custom(f) => f(t),
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }

    /// Parse a curve keyword. Case and surrounding whitespace are ignored.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "linear" => Some(TimingFunction::Linear),
            "quad:in" => Some(TimingFunction::EaseIn),
            "quad:out" => Some(TimingFunction::EaseOut),
            "quad:in:out" => Some(TimingFunction::EaseInOut),
            _ => None,
        }
    }
}

impl fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimingFunction::Linear => "Linear",
            TimingFunction::EaseIn => "EaseIn",
            TimingFunction::EaseOut => "EaseOut",
            TimingFunction::EaseInOut => "EaseInOut",
            TimingFunction::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

impl PartialEq for TimingFunction {
    /// Custom curves never compare equal
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (TimingFunction::Linear, TimingFunction::Linear)
                | (TimingFunction::EaseIn, TimingFunction::EaseIn)
                | (TimingFunction::EaseOut, TimingFunction::EaseOut)
                | (TimingFunction::EaseInOut, TimingFunction::EaseInOut)
        )
    }
}
