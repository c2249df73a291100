#![forbid(unsafe_code)]

//! Pointer tracking and the cursor-following indicator.

use std::time::Duration;

use folio_core::capabilities::ViewportCapabilities;
use folio_core::geometry::Point;

/// Latest pointer position; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    position: Option<Point>,
}

impl PointerState {
    /// No pointer event seen yet.
    #[must_use]
    pub const fn unset() -> Self {
        Self { position: None }
    }

    /// Record a pointer move. Non-finite coordinates are ignored.
    ///
    /// Returns whether the state changed.
    pub fn update(&mut self, x: f64, y: f64) -> bool {
        let next = Point::new(x, y);
        if !next.is_finite() || self.position == Some(next) {
            return false;
        }
        self.position = Some(next);
        true
    }

    /// Latest position, `None` before the first move.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        self.position
    }
}

/// Where and how to draw the follower.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerStyle {
    /// Viewport-relative center of the indicator.
    pub position: Point,
    /// Smoothing transition for each reposition.
    pub transition: Duration,
}

/// The cursor-following indicator.
///
/// Shown only on viewports at least `breakpoint` pixels wide that track a
/// hovering pointer; touch-only viewports never render it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    pub breakpoint: f64,
    pub transition: Duration,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            transition: Duration::from_millis(100),
        }
    }
}

impl CursorFollower {
    /// Whether the follower is rendered at all for this viewport.
    #[must_use]
    pub fn enabled(&self, viewport_width: f64, caps: ViewportCapabilities) -> bool {
        caps.has_fine_pointer() && viewport_width >= self.breakpoint
    }

    /// Style for the current pointer, or `None` when the follower is
    /// disabled or no pointer position is known yet.
    #[must_use]
    pub fn style(
        &self,
        pointer: &PointerState,
        viewport_width: f64,
        caps: ViewportCapabilities,
    ) -> Option<FollowerStyle> {
        if !self.enabled(viewport_width, caps) {
            return None;
        }
        pointer.position().map(|position| FollowerStyle {
            position,
            transition: self.transition,
        })
    }
}
