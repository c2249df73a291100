#![forbid(unsafe_code)]

//! Declarative style rules keyed on runtime state.
//!
//! The renderer never mutates classes imperatively. It asks this module for
//! the inline style that matches an element's current state, and the host
//! applies whatever changed.

use std::time::Duration;

use crate::config::{RevealConfig, RevealFallback};
use crate::follower::FollowerStyle;
use crate::parallax::LayerOffset;
use crate::reveal::RevealPhase;
use crate::stagger::css_seconds;

/// Ordered list of CSS declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleDecl {
    props: Vec<(&'static str, String)>,
}

impl StyleDecl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.set(prop, value);
        self
    }

    /// Set a property, replacing an earlier value in place.
    pub fn set(&mut self, prop: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.props.iter_mut().find(|(p, _)| *p == prop) {
            Some(slot) => slot.1 = value,
            None => self.props.push((prop, value)),
        }
    }

    #[must_use]
    pub fn get(&self, prop: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Inline `style` attribute text.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.props
            .iter()
            .map(|(prop, value)| format!("{prop}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Format a pixel value: rounded to 3 decimals, no trailing zeros, no `-0`.
#[must_use]
pub fn format_px(value: f64) -> String {
    if !value.is_finite() {
        return "0px".to_owned();
    }
    let mut rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{rounded}px")
}

/// `transition` shorthand for the reveal animation.
#[must_use]
pub fn reveal_transition(config: &RevealConfig) -> String {
    format!(
        "all {} {}",
        css_seconds(config.transition_duration()),
        config.easing().css()
    )
}

/// Inline style for a revealable element.
///
/// `degraded` means the viewport cannot detect intersections; the
/// configured [`RevealFallback`] then decides between the final state and
/// the hidden state, both without a transition.
#[must_use]
pub fn reveal_style(
    phase: RevealPhase,
    delay: Duration,
    degraded: bool,
    config: &RevealConfig,
) -> StyleDecl {
    let hidden_transform = format!("translateY({})", format_px(config.transition.distance_px));
    if degraded {
        return match config.fallback {
            RevealFallback::ShowContent => StyleDecl::new()
                .with("opacity", "1")
                .with("transform", "none"),
            RevealFallback::KeepHidden => StyleDecl::new()
                .with("opacity", "0")
                .with("transform", hidden_transform),
        };
    }
    let (opacity, transform) = match phase {
        RevealPhase::Hidden => ("0", hidden_transform),
        RevealPhase::Revealed => ("1", "translateY(0)".to_owned()),
    };
    StyleDecl::new()
        .with("opacity", opacity)
        .with("transform", transform)
        .with("transition", reveal_transition(config))
        .with("transition-delay", css_seconds(delay))
}

/// Inline style for a parallax layer.
#[must_use]
pub fn parallax_style(offset: LayerOffset) -> StyleDecl {
    StyleDecl::new().with(
        "transform",
        format!("translate({}, {})", format_px(offset.dx), format_px(offset.dy)),
    )
}

/// Inline style for the cursor follower.
#[must_use]
pub fn follower_style(style: &FollowerStyle) -> StyleDecl {
    let seconds = css_seconds(style.transition);
    StyleDecl::new()
        .with("left", format_px(style.position.x))
        .with("top", format_px(style.position.y))
        .with("transform", "translate(-50%, -50%)")
        .with("transition", format!("left {seconds}, top {seconds}"))
}

/// Inline style for the collapsible mobile menu panel.
#[must_use]
pub fn menu_panel_style(open: bool) -> StyleDecl {
    StyleDecl::new().with("max-height", if open { "20rem" } else { "0" })
}
