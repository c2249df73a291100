#![forbid(unsafe_code)]

//! Per-sibling reveal delays.
//!
//! Siblings that enter the viewport together should not all animate at the
//! same instant. Each revealable element carries its 1-based position among
//! its parent's children; the policy turns that position into a
//! `transition-delay`.

use std::time::Duration;

/// How a sibling position maps to a reveal delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerPolicy {
    /// Positions `1..=max_steps` get `(n - 1) * step`; later positions get
    /// no delay at all.
    Capped { step: Duration, max_steps: u32 },
    /// Every position gets `(n - 1) * step`.
    Linear { step: Duration },
}

impl Default for StaggerPolicy {
    fn default() -> Self {
        Self::Capped {
            step: Duration::from_millis(100),
            max_steps: 6,
        }
    }
}

impl StaggerPolicy {
    /// Delay for the element at 1-based `position`. Position 0 is treated
    /// as the first sibling.
    #[must_use]
    pub fn delay_for(&self, position: u32) -> Duration {
        let index = position.saturating_sub(1);
        match *self {
            Self::Capped { step, max_steps } => {
                if position > max_steps {
                    Duration::ZERO
                } else {
                    step.saturating_mul(index)
                }
            }
            Self::Linear { step } => step.saturating_mul(index),
        }
    }

    /// Number of explicit positions the policy distinguishes, if bounded.
    #[must_use]
    pub const fn explicit_steps(&self) -> Option<u32> {
        match *self {
            Self::Capped { max_steps, .. } => Some(max_steps),
            Self::Linear { .. } => None,
        }
    }

    /// Delay step.
    #[must_use]
    pub const fn step(&self) -> Duration {
        match *self {
            Self::Capped { step, .. } | Self::Linear { step } => step,
        }
    }
}

/// Format a duration as CSS seconds (`0s`, `0.1s`, `1.25s`).
#[must_use]
pub fn css_seconds(duration: Duration) -> String {
    let millis = duration.as_millis();
    let whole = millis / 1000;
    let frac = millis % 1000;
    if frac == 0 {
        return format!("{whole}s");
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}s", frac.trim_end_matches('0'))
}
