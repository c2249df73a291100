#![forbid(unsafe_code)]

//! Policy-as-data configuration for the reveal controller.
//!
//! Captures every tunable of the reveal, parallax, and cursor-follower
//! effects as a single [`RevealConfig`] that can be loaded from TOML or JSON
//! at startup.
//!
//! # Loading
//!
//! ```toml
//! # folio-reveal.toml
//! [observer]
//! threshold = 0.25
//!
//! [stagger]
//! mode = "linear"
//! step_ms = 80
//! ```
//!
//! ```rust,ignore
//! let config = RevealConfig::from_toml_file("folio-reveal.toml")?;
//! let config = RevealConfig::from_json_str(json)?;
//! ```
//!
//! # Defaults
//!
//! `RevealConfig::default()` reproduces the page as designed: 10% threshold
//! with a 100px bottom inset, 60px / 0.8s ease-out reveal, six-step 100ms
//! stagger, three parallax layers, and a 768px follower breakpoint.

#[cfg(feature = "policy-config")]
use std::path::Path;

#[cfg(feature = "policy-config")]
use serde::{Deserialize, Serialize};

use std::time::Duration;

use folio_core::easing::CubicBezier;
use folio_core::geometry::Insets;

use crate::follower::CursorFollower;
use crate::intersection::ObserverOptions;
use crate::parallax::{ParallaxField, ParallaxLayer};
use crate::stagger::StaggerPolicy;

// ---------------------------------------------------------------------------
// Top-level RevealConfig
// ---------------------------------------------------------------------------

/// Top-level configuration for the viewport reveal controller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct RevealConfig {
    /// Intersection detection parameters.
    pub observer: ObserverPolicyConfig,

    /// Reveal transition parameters.
    pub transition: TransitionPolicyConfig,

    /// Per-sibling reveal delays.
    pub stagger: StaggerPolicyConfig,

    /// Scroll-driven decorative layers.
    pub parallax: ParallaxPolicyConfig,

    /// Cursor follower parameters.
    pub follower: FollowerPolicyConfig,

    /// What to render when intersection detection is unavailable.
    pub fallback: RevealFallback,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            observer: ObserverPolicyConfig::default(),
            transition: TransitionPolicyConfig::default(),
            stagger: StaggerPolicyConfig::default(),
            parallax: ParallaxPolicyConfig::default(),
            follower: FollowerPolicyConfig::default(),
            fallback: RevealFallback::default(),
        }
    }
}

impl RevealConfig {
    /// Load from a TOML string.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, RevealConfigError> {
        let config: Self = toml::from_str(s).map_err(RevealConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, RevealConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RevealConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "policy-config")]
    pub fn from_json_str(s: &str) -> Result<Self, RevealConfigError> {
        let config: Self = serde_json::from_str(s).map_err(RevealConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "policy-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RevealConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RevealConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty JSON.
    #[cfg(feature = "policy-config")]
    pub fn to_json(&self) -> Result<String, RevealConfigError> {
        serde_json::to_string_pretty(self).map_err(RevealConfigError::Json)
    }

    /// Return `self` if it validates, otherwise the collected errors.
    pub fn validated(self) -> Result<Self, RevealConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(RevealConfigError::Validation(errors))
        }
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let threshold = self.observer.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            errors.push(format!(
                "observer.threshold must be in [0, 1], got {threshold}"
            ));
        }

        let margin = &self.observer.root_margin;
        if ![margin.top, margin.right, margin.bottom, margin.left]
            .iter()
            .all(|v| v.is_finite())
        {
            errors.push("observer.root_margin must be finite".into());
        }

        if !self.transition.distance_px.is_finite() {
            errors.push("transition.distance_px must be finite".into());
        }
        if self.transition.duration_ms == 0 {
            errors.push("transition.duration_ms must be > 0".into());
        }
        let easing = &self.transition.easing;
        if !(0.0..=1.0).contains(&easing.x1) || !(0.0..=1.0).contains(&easing.x2) {
            errors.push(format!(
                "transition.easing x1/x2 must be in [0, 1], got {}/{}",
                easing.x1, easing.x2
            ));
        }
        if !easing.y1.is_finite() || !easing.y2.is_finite() {
            errors.push(format!(
                "transition.easing y1/y2 must be finite, got {}/{}",
                easing.y1, easing.y2
            ));
        }

        if self.stagger.mode == StaggerMode::Capped && self.stagger.max_steps == 0 {
            errors.push("stagger.max_steps must be > 0 in capped mode".into());
        }

        if self.parallax.layers.is_empty() {
            errors.push("parallax.layers must not be empty".into());
        }
        for (i, layer) in self.parallax.layers.iter().enumerate() {
            if !layer.x.is_finite() || !layer.y.is_finite() {
                errors.push(format!("parallax.layers[{i}] coefficients must be finite"));
            }
        }

        if !(self.follower.breakpoint_px.is_finite() && self.follower.breakpoint_px > 0.0) {
            errors.push(format!(
                "follower.breakpoint_px must be > 0, got {}",
                self.follower.breakpoint_px
            ));
        }

        errors
    }

    /// Intersection observer options.
    #[must_use]
    pub fn to_observer_options(&self) -> ObserverOptions {
        let m = &self.observer.root_margin;
        ObserverOptions {
            threshold: self.observer.threshold,
            root_margin: Insets::new(m.top, m.right, m.bottom, m.left),
        }
    }

    /// Stagger policy.
    #[must_use]
    pub fn to_stagger_policy(&self) -> StaggerPolicy {
        let step = Duration::from_millis(self.stagger.step_ms);
        match self.stagger.mode {
            StaggerMode::Capped => StaggerPolicy::Capped {
                step,
                max_steps: self.stagger.max_steps,
            },
            StaggerMode::Linear => StaggerPolicy::Linear { step },
        }
    }

    /// Parallax layers.
    #[must_use]
    pub fn to_parallax_field(&self) -> ParallaxField {
        ParallaxField::new(
            self.parallax
                .layers
                .iter()
                .map(|l| ParallaxLayer::new(l.x, l.y))
                .collect(),
        )
    }

    /// Cursor follower.
    #[must_use]
    pub fn to_follower(&self) -> CursorFollower {
        CursorFollower {
            breakpoint: self.follower.breakpoint_px,
            transition: Duration::from_millis(self.follower.transition_ms),
        }
    }

    /// Reveal transition duration.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition.duration_ms)
    }

    /// Reveal transition easing curve.
    #[must_use]
    pub fn easing(&self) -> CubicBezier {
        let e = &self.transition.easing;
        CubicBezier::new(e.x1, e.y1, e.x2, e.y2)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Intersection observer parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ObserverPolicyConfig {
    /// Fraction of the element that must be visible. Default: 0.1.
    pub threshold: f64,
    /// Root margin applied to the viewport. Default: `0 0 -100 0`.
    pub root_margin: MarginPolicyConfig,
}

impl Default for ObserverPolicyConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: MarginPolicyConfig {
                top: 0.0,
                right: 0.0,
                bottom: -100.0,
                left: 0.0,
            },
        }
    }
}

/// CSS-style margin in pixels; negative values shrink the root.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct MarginPolicyConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Reveal transition parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct TransitionPolicyConfig {
    /// Vertical offset of a hidden element. Default: 60.
    pub distance_px: f64,
    /// Transition duration. Default: 800.
    pub duration_ms: u64,
    /// Timing curve. Default: `cubic-bezier(0.16, 1, 0.3, 1)`.
    pub easing: EasingPolicyConfig,
}

impl Default for TransitionPolicyConfig {
    fn default() -> Self {
        Self {
            distance_px: 60.0,
            duration_ms: 800,
            easing: EasingPolicyConfig {
                x1: 0.16,
                y1: 1.0,
                x2: 0.3,
                y2: 1.0,
            },
        }
    }
}

/// Cubic-bezier control points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
pub struct EasingPolicyConfig {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// How sibling delays grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(rename_all = "snake_case"))]
pub enum StaggerMode {
    /// Only the first `max_steps` siblings are delayed.
    #[default]
    Capped,
    /// Every sibling is delayed by its position.
    Linear,
}

/// Stagger parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct StaggerPolicyConfig {
    /// Default: capped.
    pub mode: StaggerMode,
    /// Delay added per sibling position. Default: 100.
    pub step_ms: u64,
    /// Positions that receive a delay in capped mode. Default: 6.
    pub max_steps: u32,
}

impl Default for StaggerPolicyConfig {
    fn default() -> Self {
        Self {
            mode: StaggerMode::Capped,
            step_ms: 100,
            max_steps: 6,
        }
    }
}

/// One parallax layer's coefficients.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
pub struct LayerPolicyConfig {
    pub x: f64,
    pub y: f64,
}

/// Parallax layers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct ParallaxPolicyConfig {
    /// Default: `(0.1, 0.2)`, `(-0.15, 0.1)`, `(0.05, -0.15)`.
    pub layers: Vec<LayerPolicyConfig>,
}

impl Default for ParallaxPolicyConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                LayerPolicyConfig { x: 0.1, y: 0.2 },
                LayerPolicyConfig { x: -0.15, y: 0.1 },
                LayerPolicyConfig { x: 0.05, y: -0.15 },
            ],
        }
    }
}

/// Cursor follower parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(default))]
pub struct FollowerPolicyConfig {
    /// Minimum viewport width that shows the follower. Default: 768.
    pub breakpoint_px: f64,
    /// Smoothing transition. Default: 100.
    pub transition_ms: u64,
}

impl Default for FollowerPolicyConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            transition_ms: 100,
        }
    }
}

/// Rendering used for revealable elements when the viewport cannot detect
/// intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "policy-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "policy-config", serde(rename_all = "snake_case"))]
pub enum RevealFallback {
    /// Render content in its final visual state, without animation.
    #[default]
    ShowContent,
    /// Keep the hidden visual style.
    KeepHidden,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a reveal configuration.
#[derive(Debug)]
pub enum RevealConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "policy-config")]
    Toml(toml::de::Error),
    /// JSON parse or encode error.
    #[cfg(feature = "policy-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for RevealConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for RevealConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "policy-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
