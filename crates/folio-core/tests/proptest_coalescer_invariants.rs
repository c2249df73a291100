//! Property-based invariant tests for the event coalescer.
//!
//! ## Invariants
//!
//! 1. Final state equivalence: folding the coalesced batch yields the same
//!    final scroll offset, pointer position, and viewport size as folding the
//!    raw stream.
//! 2. Pass-through order: clicks and layout reports keep their relative order.
//! 3. Never grows: the coalesced batch is no longer than the input.

use folio_core::event::{ClickTarget, ViewportEvent};
use folio_core::event_coalescer::EventCoalescer;
use folio_core::geometry::Rect;
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

fn arb_event() -> impl Strategy<Value = ViewportEvent> {
    prop_oneof![
        (0u32..5000).prop_map(|o| ViewportEvent::Scroll {
            offset: f64::from(o)
        }),
        (0u32..2000, 0u32..2000).prop_map(|(x, y)| ViewportEvent::PointerMove {
            x: f64::from(x),
            y: f64::from(y)
        }),
        (320u32..2560, 480u32..1600).prop_map(|(w, h)| ViewportEvent::Resize {
            width: f64::from(w),
            height: f64::from(h)
        }),
        Just(ViewportEvent::Click(ClickTarget::MenuButton)),
        (0u32..16).prop_map(|id| ViewportEvent::Layout {
            id,
            rect: Rect::new(0.0, f64::from(id) * 100.0, 100.0, 50.0)
        }),
    ]
}

#[derive(Debug, Default, PartialEq)]
struct Folded {
    scroll: Option<f64>,
    pointer: Option<(f64, f64)>,
    size: Option<(f64, f64)>,
    passthrough: Vec<ViewportEvent>,
}

fn fold(events: &[ViewportEvent]) -> Folded {
    let mut state = Folded::default();
    for event in events {
        match event {
            ViewportEvent::Scroll { offset } => state.scroll = Some(*offset),
            ViewportEvent::PointerMove { x, y } => state.pointer = Some((*x, *y)),
            ViewportEvent::Resize { width, height } => state.size = Some((*width, *height)),
            other => state.passthrough.push(other.clone()),
        }
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn coalesced_batch_preserves_final_state(events in prop::collection::vec(arb_event(), 0..64)) {
        let mut coalescer = EventCoalescer::new();
        let batch = coalescer.coalesce_batch(events.clone());
        prop_assert_eq!(fold(&batch), fold(&events));
    }

    #[test]
    fn coalesced_batch_never_grows(events in prop::collection::vec(arb_event(), 0..64)) {
        let mut coalescer = EventCoalescer::new();
        let batch = coalescer.coalesce_batch(events.clone());
        prop_assert!(batch.len() <= events.len());
        prop_assert!(!coalescer.has_pending());
    }
}
