#![forbid(unsafe_code)]

//! Platform capability flags.
//!
//! The runtime treats every capability as a best-effort enhancement: a
//! missing flag disables the matching effect, it never fails the page.

use bitflags::bitflags;

bitflags! {
    /// Facilities the hosting viewport provides.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ViewportCapabilities: u8 {
        /// Viewport-intersection detection is available.
        const INTERSECTION_OBSERVER = 0b0000_0001;
        /// Pointer-move events are delivered.
        const POINTER_EVENTS = 0b0000_0010;
        /// The primary pointer can hover (not touch-only).
        const HOVER = 0b0000_0100;
    }
}

impl ViewportCapabilities {
    /// A desktop browser with every facility.
    #[must_use]
    pub const fn modern() -> Self {
        Self::all()
    }

    /// A touch-only device: intersection detection but no pointer tracking.
    #[must_use]
    pub const fn touch_only() -> Self {
        Self::INTERSECTION_OBSERVER
    }

    /// A runtime with none of the optional facilities.
    #[must_use]
    pub const fn legacy() -> Self {
        Self::empty()
    }

    /// Intersection detection is available.
    #[must_use]
    pub const fn has_intersection_observer(self) -> bool {
        self.contains(Self::INTERSECTION_OBSERVER)
    }

    /// A hovering pointer is tracked; drives the cursor follower.
    #[must_use]
    pub const fn has_fine_pointer(self) -> bool {
        self.contains(Self::POINTER_EVENTS) && self.contains(Self::HOVER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert!(ViewportCapabilities::modern().has_intersection_observer());
        assert!(ViewportCapabilities::modern().has_fine_pointer());
        assert!(!ViewportCapabilities::touch_only().has_fine_pointer());
        assert!(!ViewportCapabilities::legacy().has_intersection_observer());
    }

    #[test]
    fn pointer_without_hover_is_not_fine() {
        let caps = ViewportCapabilities::POINTER_EVENTS;
        assert!(!caps.has_fine_pointer());
    }
}
