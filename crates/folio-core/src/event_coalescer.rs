#![forbid(unsafe_code)]

//! Event coalescing for high-frequency viewport events.
//!
//! Browsers fire `scroll` and `pointermove` far more often than a frame can
//! use them. Every event would otherwise trigger a controller update and a
//! style recomputation.
//!
//! This module provides [`EventCoalescer`] which:
//! - Keeps only the latest scroll offset
//! - Keeps only the latest pointer position
//! - Keeps only the latest viewport size
//! - Passes clicks and layout reports through immediately
//!
//! The caller is responsible for flushing pending events before handling a
//! pass-through event, or can use [`EventCoalescer::coalesce_batch`], which
//! does that and preserves the relative order of state changes.
//!
//! # Usage
//!
//! ```
//! use folio_core::event::{ClickTarget, ViewportEvent};
//! use folio_core::event_coalescer::EventCoalescer;
//!
//! let mut coalescer = EventCoalescer::new();
//! assert!(coalescer.push(ViewportEvent::Scroll { offset: 10.0 }).is_none());
//! assert!(coalescer.push(ViewportEvent::Scroll { offset: 40.0 }).is_none());
//!
//! let click = ViewportEvent::Click(ClickTarget::MenuButton);
//! assert_eq!(coalescer.push(click.clone()), Some(click));
//!
//! let pending = coalescer.flush();
//! assert_eq!(pending, vec![ViewportEvent::Scroll { offset: 40.0 }]);
//! ```

use crate::event::ViewportEvent;

/// Coalesces high-frequency viewport events.
///
/// Not thread-safe; used from the single event-loop thread. Holds at most
/// one pending event per coalescable kind.
#[derive(Debug, Clone, Default)]
pub struct EventCoalescer {
    pending_resize: Option<(f64, f64)>,
    pending_scroll: Option<f64>,
    pending_pointer: Option<(f64, f64)>,
    scroll_count: u32,
}

impl EventCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event.
    ///
    /// Returns `Some(event)` if it should be processed now, `None` if it was
    /// absorbed into a pending event.
    pub fn push(&mut self, event: ViewportEvent) -> Option<ViewportEvent> {
        match event {
            ViewportEvent::Scroll { offset } => {
                self.pending_scroll = Some(offset);
                self.scroll_count = self.scroll_count.saturating_add(1);
                None
            }
            ViewportEvent::PointerMove { x, y } => {
                self.pending_pointer = Some((x, y));
                None
            }
            ViewportEvent::Resize { width, height } => {
                self.pending_resize = Some((width, height));
                None
            }
            other => Some(other),
        }
    }

    /// Flush all pending coalesced events.
    ///
    /// Order: resize, then scroll, then pointer. Resize goes first because
    /// a new viewport changes how the scroll offset is interpreted.
    #[must_use]
    pub fn flush(&mut self) -> Vec<ViewportEvent> {
        let mut events = Vec::with_capacity(3);
        self.flush_each(|event| events.push(event));
        events
    }

    /// Flush pending events, calling a closure for each.
    pub fn flush_each<F>(&mut self, mut f: F)
    where
        F: FnMut(ViewportEvent),
    {
        if let Some((width, height)) = self.pending_resize.take() {
            f(ViewportEvent::Resize { width, height });
        }
        if let Some(offset) = self.pending_scroll.take() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                coalesced = self.scroll_count,
                offset,
                "flushing coalesced scroll"
            );
            f(ViewportEvent::Scroll { offset });
        }
        self.scroll_count = 0;
        if let Some((x, y)) = self.pending_pointer.take() {
            f(ViewportEvent::PointerMove { x, y });
        }
    }

    /// Coalesce a whole batch, flushing before each pass-through event.
    #[must_use]
    pub fn coalesce_batch<I>(&mut self, events: I) -> Vec<ViewportEvent>
    where
        I: IntoIterator<Item = ViewportEvent>,
    {
        let mut out = Vec::new();
        for event in events {
            if let Some(passthrough) = self.push(event) {
                self.flush_each(|pending| out.push(pending));
                out.push(passthrough);
            }
        }
        self.flush_each(|pending| out.push(pending));
        out
    }

    /// Check if there are any pending coalesced events.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_resize.is_some() || self.pending_scroll.is_some() || self.pending_pointer.is_some()
    }

    /// Number of scroll events folded into the pending one.
    #[must_use]
    pub fn pending_scroll_count(&self) -> u32 {
        self.scroll_count
    }

    /// Discard pending events without processing them.
    pub fn clear(&mut self) {
        self.pending_resize = None;
        self.pending_scroll = None;
        self.pending_pointer = None;
        self.scroll_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ClickTarget;
    use crate::geometry::Rect;
    use crate::section::Section;

    #[test]
    fn new_coalescer_has_no_pending() {
        let coalescer = EventCoalescer::new();
        assert!(!coalescer.has_pending());
        assert_eq!(coalescer.pending_scroll_count(), 0);
    }

    #[test]
    fn scroll_keeps_latest_offset() {
        let mut coalescer = EventCoalescer::new();
        for offset in [10.0, 20.0, 35.0] {
            assert!(coalescer.push(ViewportEvent::Scroll { offset }).is_none());
        }
        assert_eq!(coalescer.pending_scroll_count(), 3);
        assert_eq!(
            coalescer.flush(),
            vec![ViewportEvent::Scroll { offset: 35.0 }]
        );
        assert_eq!(coalescer.pending_scroll_count(), 0);
    }

    #[test]
    fn pointer_moves_coalesce() {
        let mut coalescer = EventCoalescer::new();
        coalescer.push(ViewportEvent::PointerMove { x: 1.0, y: 1.0 });
        coalescer.push(ViewportEvent::PointerMove { x: 20.0, y: 25.0 });
        assert_eq!(
            coalescer.flush(),
            vec![ViewportEvent::PointerMove { x: 20.0, y: 25.0 }]
        );
    }

    #[test]
    fn flush_orders_resize_scroll_pointer() {
        let mut coalescer = EventCoalescer::new();
        coalescer.push(ViewportEvent::PointerMove { x: 1.0, y: 2.0 });
        coalescer.push(ViewportEvent::Scroll { offset: 5.0 });
        coalescer.push(ViewportEvent::Resize {
            width: 800.0,
            height: 600.0,
        });
        let kinds: Vec<_> = coalescer.flush().iter().map(|e| e.kind()).collect();
        use crate::event::EventKind;
        assert_eq!(
            kinds,
            vec![EventKind::Resize, EventKind::Scroll, EventKind::PointerMove]
        );
    }

    #[test]
    fn clicks_and_layout_pass_through() {
        let mut coalescer = EventCoalescer::new();
        let click = ViewportEvent::Click(ClickTarget::NavLink(Section::About));
        assert_eq!(coalescer.push(click.clone()), Some(click));
        let layout = ViewportEvent::Layout {
            id: 1,
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        };
        assert_eq!(coalescer.push(layout.clone()), Some(layout));
        assert!(!coalescer.has_pending());
    }

    #[test]
    fn batch_flushes_before_passthrough() {
        let mut coalescer = EventCoalescer::new();
        let out = coalescer.coalesce_batch([
            ViewportEvent::Scroll { offset: 1.0 },
            ViewportEvent::Scroll { offset: 2.0 },
            ViewportEvent::Click(ClickTarget::MenuButton),
            ViewportEvent::Scroll { offset: 3.0 },
        ]);
        assert_eq!(
            out,
            vec![
                ViewportEvent::Scroll { offset: 2.0 },
                ViewportEvent::Click(ClickTarget::MenuButton),
                ViewportEvent::Scroll { offset: 3.0 },
            ]
        );
        assert!(!coalescer.has_pending());
    }

    #[test]
    fn clear_discards_pending() {
        let mut coalescer = EventCoalescer::new();
        coalescer.push(ViewportEvent::Scroll { offset: 1.0 });
        coalescer.clear();
        assert!(coalescer.flush().is_empty());
    }
}
