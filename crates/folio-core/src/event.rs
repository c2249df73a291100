#![forbid(unsafe_code)]

//! Canonical viewport event types.
//!
//! The host pushes these into the runtime. Coordinates are CSS pixels; scroll
//! offsets are the page's vertical scroll position, not deltas.
//!
//! # Design Notes
//!
//! - Pointer coordinates are viewport-relative (`clientX`/`clientY`).
//! - `Layout` carries document-space boxes for revealable elements, so the
//!   intersection observer can run without querying the host.
//! - Events are `PartialEq` (not `Eq`) because they carry `f64`.

use crate::geometry::Rect;
use crate::section::Section;

/// Canonical viewport event.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportEvent {
    /// The page scrolled to a new vertical offset.
    Scroll {
        /// Current vertical scroll offset in pixels.
        offset: f64,
    },

    /// The pointer moved.
    PointerMove {
        x: f64,
        y: f64,
    },

    /// The viewport was resized.
    Resize {
        width: f64,
        height: f64,
    },

    /// The user activated a clickable target.
    Click(ClickTarget),

    /// The host measured a revealable element's box.
    Layout {
        /// Element identifier assigned at render time.
        id: u32,
        /// Document-space box.
        rect: Rect,
    },
}

impl ViewportEvent {
    /// The kind used for subscription routing.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Scroll { .. } => EventKind::Scroll,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::Resize { .. } => EventKind::Resize,
            Self::Click(_) => EventKind::Click,
            Self::Layout { .. } => EventKind::Layout,
        }
    }
}

/// Subscription key for [`ViewportEvent`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Scroll,
    PointerMove,
    Resize,
    Click,
    Layout,
}

impl EventKind {
    /// DOM event name this kind mirrors.
    #[must_use]
    pub const fn dom_name(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::PointerMove => "pointermove",
            Self::Resize => "resize",
            Self::Click => "click",
            Self::Layout => "layout",
        }
    }
}

/// Something the user can click.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// The mobile navigation toggle button.
    MenuButton,
    /// An in-page navigation link.
    NavLink(Section),
    /// The hero call-to-action that scrolls to the projects section.
    ExploreWork,
    /// An outbound link; opaque to the runtime.
    External(String),
}

impl ClickTarget {
    /// The `data-click` attribute value rendered for this target.
    #[must_use]
    pub fn data_key(&self) -> String {
        match self {
            Self::MenuButton => "menu".to_owned(),
            Self::NavLink(section) => format!("nav:{}", section.anchor()),
            Self::ExploreWork => "explore".to_owned(),
            Self::External(url) => format!("external:{url}"),
        }
    }

    /// Parse a `data-click` attribute value.
    #[must_use]
    pub fn from_data_key(key: &str) -> Option<Self> {
        match key {
            "menu" => Some(Self::MenuButton),
            "explore" => Some(Self::ExploreWork),
            other => {
                if let Some(anchor) = other.strip_prefix("nav:") {
                    Section::from_anchor(anchor).map(Self::NavLink)
                } else {
                    other
                        .strip_prefix("external:")
                        .filter(|url| !url.is_empty())
                        .map(|url| Self::External(url.to_owned()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(ViewportEvent::Scroll { offset: 1.0 }.kind(), EventKind::Scroll);
        assert_eq!(
            ViewportEvent::PointerMove { x: 0.0, y: 0.0 }.kind(),
            EventKind::PointerMove
        );
        assert_eq!(
            ViewportEvent::Click(ClickTarget::MenuButton).kind(),
            EventKind::Click
        );
        assert_eq!(
            ViewportEvent::Layout {
                id: 3,
                rect: Rect::default()
            }
            .kind(),
            EventKind::Layout
        );
    }

    #[test]
    fn data_keys_round_trip() {
        let targets = [
            ClickTarget::MenuButton,
            ClickTarget::ExploreWork,
            ClickTarget::NavLink(Section::Skills),
            ClickTarget::External("https://example.com".into()),
        ];
        for target in targets {
            assert_eq!(ClickTarget::from_data_key(&target.data_key()), Some(target));
        }
    }

    #[test]
    fn unknown_data_keys() {
        assert_eq!(ClickTarget::from_data_key("nav:blog"), None);
        assert_eq!(ClickTarget::from_data_key("external:"), None);
        assert_eq!(ClickTarget::from_data_key("logo"), None);
    }

    #[test]
    fn dom_names() {
        assert_eq!(EventKind::PointerMove.dom_name(), "pointermove");
        assert_eq!(EventKind::Scroll.dom_name(), "scroll");
    }
}
