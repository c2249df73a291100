#![forbid(unsafe_code)]

//! The viewport reveal controller.
//!
//! Owns scroll, pointer and viewport state, the set of revealable elements,
//! and (while mounted) the intersection observer plus every event
//! subscription it created.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──mount──▶ Mounted ──unmount──▶ Unmounted
//!                    ▲                     │
//!                    └───────mount─────────┘
//! ```
//!
//! Mounting twice is a no-op, and so is unmounting twice. After
//! `unmount` no handler the controller subscribed can fire again.
//!
//! # Intersection delivery
//!
//! Observer records are delivered lazily. Scroll, resize and layout changes
//! only mark the observer dirty; the host calls
//! [`ViewportRevealController::flush_intersections`] once per step, which
//! evaluates every target and routes the records through
//! [`ViewportRevealController::on_intersection`].
//!
//! # Degradation
//!
//! A viewport without intersection detection never creates an observer, and
//! one without pointer events never subscribes to pointer moves. Neither is
//! an error: the controller logs at `debug` and keeps going, and the
//! configured [`RevealFallback`](crate::config::RevealFallback) decides how
//! revealable elements render.

use std::time::Duration;

use folio_core::capabilities::ViewportCapabilities;
use folio_core::event::{EventKind, ViewportEvent};
use folio_core::geometry::{Point, Rect, Size};

use crate::config::RevealConfig;
use crate::follower::{CursorFollower, FollowerStyle, PointerState};
use crate::intersection::IntersectionObserver;
use crate::parallax::{LayerOffset, ParallaxField};
use crate::reveal::{ElementId, RevealPhase, RevealRegistry, RevealTransition};
use crate::stagger::StaggerPolicy;
use crate::style::{StyleDecl, reveal_style};
use crate::subscription::{EventHub, SubscriptionSet};

/// Event kinds the controller listens to while mounted.
const SUBSCRIBED_KINDS: [EventKind; 4] = [
    EventKind::Scroll,
    EventKind::PointerMove,
    EventKind::Resize,
    EventKind::Layout,
];

/// Messages produced by the controller's subscriptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMsg {
    Scrolled(f64),
    PointerMoved { x: f64, y: f64 },
    Resized { width: f64, height: f64 },
    LayoutChanged { id: ElementId, rect: Rect },
}

impl RevealMsg {
    /// Map a raw viewport event to a controller message.
    ///
    /// Clicks are not the controller's concern and map to `None`.
    #[must_use]
    pub fn from_event(event: &ViewportEvent) -> Option<Self> {
        match *event {
            ViewportEvent::Scroll { offset } => Some(Self::Scrolled(offset)),
            ViewportEvent::PointerMove { x, y } => Some(Self::PointerMoved { x, y }),
            ViewportEvent::Resize { width, height } => Some(Self::Resized { width, height }),
            ViewportEvent::Layout { id, rect } => Some(Self::LayoutChanged {
                id: ElementId(id),
                rect,
            }),
            ViewportEvent::Click(_) => None,
        }
    }
}

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Mounted,
    Unmounted,
}

/// Render-facing state of one revealable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementView {
    pub id: ElementId,
    pub sibling_index: u32,
    pub phase: RevealPhase,
    /// `transition-delay` from the stagger policy.
    pub delay: Duration,
}

/// Read-only view of the controller for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealSnapshot {
    pub scroll: f64,
    pub pointer: Option<Point>,
    pub viewport: Size,
    /// Registered elements, in id order.
    pub elements: Vec<ElementView>,
    /// One offset per parallax layer, back to front.
    pub parallax: Vec<LayerOffset>,
    /// `None` when the follower is disabled or no pointer is known.
    pub follower: Option<FollowerStyle>,
    /// The viewport cannot detect intersections.
    pub degraded: bool,
    pub is_mounted: bool,
}

impl RevealSnapshot {
    /// View of one element, if registered.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&ElementView> {
        self.elements
            .binary_search_by_key(&id, |e| e.id)
            .ok()
            .map(|i| &self.elements[i])
    }

    /// Phase of one element, if registered.
    #[must_use]
    pub fn phase(&self, id: ElementId) -> Option<RevealPhase> {
        self.element(id).map(|e| e.phase)
    }

    /// Number of revealed elements.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.elements.iter().filter(|e| e.phase.is_revealed()).count()
    }
}

/// Drives scroll-triggered reveals, parallax and the cursor follower.
#[derive(Debug)]
pub struct ViewportRevealController {
    config: RevealConfig,
    caps: ViewportCapabilities,
    stagger: StaggerPolicy,
    parallax: ParallaxField,
    follower: CursorFollower,
    registry: RevealRegistry,
    observer: Option<IntersectionObserver>,
    observer_dirty: bool,
    scroll: f64,
    pointer: PointerState,
    viewport: Size,
    subscriptions: SubscriptionSet,
    lifecycle: Lifecycle,
}

impl ViewportRevealController {
    /// Create an idle controller: scroll 0, no pointer, nothing registered.
    #[must_use]
    pub fn new(config: RevealConfig, caps: ViewportCapabilities, viewport: Size) -> Self {
        Self {
            stagger: config.to_stagger_policy(),
            parallax: config.to_parallax_field(),
            follower: config.to_follower(),
            config,
            caps,
            registry: RevealRegistry::new(),
            observer: None,
            observer_dirty: false,
            scroll: 0.0,
            pointer: PointerState::unset(),
            viewport: sanitize_size(viewport),
            subscriptions: SubscriptionSet::new(),
            lifecycle: Lifecycle::Idle,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    #[must_use]
    pub const fn capabilities(&self) -> ViewportCapabilities {
        self.caps
    }

    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// The viewport cannot detect intersections.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.caps.has_intersection_observer()
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    #[must_use]
    pub const fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub const fn stagger(&self) -> &StaggerPolicy {
        &self.stagger
    }

    #[must_use]
    pub const fn registry(&self) -> &RevealRegistry {
        &self.registry
    }

    /// Whether an intersection observer is live.
    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Number of subscriptions currently held.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    // ── Elements ────────────────────────────────────────────────────────

    /// Add an element to the watched set, or refresh its layout.
    ///
    /// While mounted with an observer the element is observed right away.
    /// Returns `true` if the id was new.
    pub fn register_revealable(&mut self, id: ElementId, rect: Rect, sibling_index: u32) -> bool {
        let added = self.registry.register(id, rect, sibling_index);
        if let Some(observer) = self.observer.as_mut() {
            observer.observe(id, rect);
            self.observer_dirty = true;
        }
        tracing::trace!(element_id = id.get(), sibling_index, added, "revealable registered");
        added
    }

    /// Drop an element. Returns `false` for unknown ids.
    pub fn unregister_revealable(&mut self, id: ElementId) -> bool {
        if let Some(observer) = self.observer.as_mut() {
            observer.unobserve(id);
        }
        self.registry.unregister(id).is_some()
    }

    /// Update an element's box. Returns `false` for unknown ids.
    pub fn update_layout(&mut self, id: ElementId, rect: Rect) -> bool {
        if !self.registry.set_rect(id, rect) {
            return false;
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.update_target(id, rect);
            self.observer_dirty = true;
        }
        true
    }

    // ── Handlers ────────────────────────────────────────────────────────

    /// Apply an intersection report. Revealing is one-shot: repeated
    /// reports and later non-intersecting reports change nothing.
    pub fn on_intersection(&mut self, id: ElementId, is_intersecting: bool) -> RevealTransition {
        let transition = self.registry.mark(id, is_intersecting);
        if transition == RevealTransition::Revealed {
            tracing::debug!(target: "folio.reveal", element_id = id.get(), "element revealed");
        }
        transition
    }

    /// Record the vertical scroll offset.
    ///
    /// Negative offsets (overscroll) clamp to 0; non-finite values are
    /// ignored. Returns whether the offset changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        if !offset.is_finite() {
            return false;
        }
        let offset = offset.max(0.0);
        if offset == self.scroll {
            return false;
        }
        self.scroll = offset;
        self.observer_dirty = true;
        true
    }

    /// Record the pointer position. Returns whether it changed.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.pointer.update(x, y)
    }

    /// Record a viewport resize. Non-finite sizes are ignored.
    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        if !width.is_finite() || !height.is_finite() {
            return false;
        }
        let next = sanitize_size(Size::new(width, height));
        if next == self.viewport {
            return false;
        }
        self.viewport = next;
        self.observer_dirty = true;
        true
    }

    /// Route a subscription message to its handler.
    pub fn update(&mut self, msg: RevealMsg) {
        match msg {
            RevealMsg::Scrolled(offset) => {
                self.on_scroll(offset);
            }
            RevealMsg::PointerMoved { x, y } => {
                self.on_pointer_move(x, y);
            }
            RevealMsg::Resized { width, height } => {
                self.on_resize(width, height);
            }
            RevealMsg::LayoutChanged { id, rect } => {
                self.update_layout(id, rect);
            }
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Subscribe to viewport events and start intersection detection.
    ///
    /// Sources the viewport cannot provide are skipped. Returns the number of
    /// subscriptions created; 0 when already mounted.
    pub fn mount<M>(&mut self, hub: &mut EventHub<M>) -> usize
    where
        M: From<RevealMsg> + 'static,
    {
        if self.is_mounted() {
            return 0;
        }

        let mut created = 0;
        for kind in SUBSCRIBED_KINDS {
            match hub.subscribe(kind, |event: &ViewportEvent| {
                RevealMsg::from_event(event).map(M::from)
            }) {
                Ok(token) => {
                    self.subscriptions.push(token);
                    created += 1;
                }
                Err(err) => {
                    tracing::debug!(
                        target: "folio.reveal",
                        kind = kind.dom_name(),
                        %err,
                        "event source unavailable, continuing without it"
                    );
                }
            }
        }

        if self.caps.has_intersection_observer() {
            let mut observer = IntersectionObserver::new(self.config.to_observer_options());
            for element in self.registry.iter() {
                observer.observe(element.id, element.rect);
            }
            self.observer = Some(observer);
            self.observer_dirty = true;
        } else {
            tracing::debug!(
                target: "folio.reveal",
                fallback = ?self.config.fallback,
                "intersection detection unavailable, reveals degrade to fallback"
            );
        }

        self.lifecycle = Lifecycle::Mounted;
        tracing::debug!(
            target: "folio.reveal",
            subscriptions = created,
            elements = self.registry.len(),
            "reveal controller mounted"
        );
        created
    }

    /// Release every subscription and disconnect the observer.
    ///
    /// Returns the number of subscriptions released; 0 when not mounted.
    pub fn unmount<M>(&mut self, hub: &mut EventHub<M>) -> usize {
        if !self.is_mounted() {
            return 0;
        }
        let released = self.subscriptions.release_all(hub);
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.observer_dirty = false;
        self.lifecycle = Lifecycle::Unmounted;
        tracing::debug!(target: "folio.reveal", released, "reveal controller unmounted");
        released
    }

    /// Deliver pending intersection records.
    ///
    /// Returns the number of elements newly revealed.
    pub fn flush_intersections(&mut self) -> usize {
        if !self.observer_dirty {
            return 0;
        }
        self.observer_dirty = false;
        let root = Rect::new(0.0, self.scroll, self.viewport.width, self.viewport.height);
        let records = match self.observer.as_mut() {
            Some(observer) => observer.take_records(root),
            None => return 0,
        };
        records
            .into_iter()
            .filter(|record| {
                self.on_intersection(record.target, record.is_intersecting)
                    == RevealTransition::Revealed
            })
            .count()
    }

    // ── Read side ───────────────────────────────────────────────────────

    /// Whether an element has been revealed.
    #[must_use]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.registry.phase(id).is_some_and(RevealPhase::is_revealed)
    }

    /// Reveal style for a registered element.
    #[must_use]
    pub fn element_style(&self, id: ElementId) -> Option<StyleDecl> {
        self.registry.get(id).map(|element| {
            reveal_style(
                element.phase,
                self.stagger.delay_for(element.sibling_index),
                self.is_degraded(),
                &self.config,
            )
        })
    }

    /// Current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            scroll: self.scroll,
            pointer: self.pointer.position(),
            viewport: self.viewport,
            elements: self
                .registry
                .iter()
                .map(|e| ElementView {
                    id: e.id,
                    sibling_index: e.sibling_index,
                    phase: e.phase,
                    delay: self.stagger.delay_for(e.sibling_index),
                })
                .collect(),
            parallax: self.parallax.offsets(self.scroll),
            follower: self.follower.style(&self.pointer, self.viewport.width, self.caps),
            degraded: self.is_degraded(),
            is_mounted: self.is_mounted(),
        }
    }
}

fn sanitize_size(size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ViewportRevealController {
        ViewportRevealController::new(
            RevealConfig::default(),
            ViewportCapabilities::modern(),
            Size::new(1280.0, 800.0),
        )
    }

    #[test]
    fn starts_idle_and_empty() {
        let c = controller();
        assert_eq!(c.lifecycle(), Lifecycle::Idle);
        assert_eq!(c.scroll_offset(), 0.0);
        assert_eq!(c.pointer().position(), None);
        assert!(!c.has_observer());
    }

    #[test]
    fn scroll_clamps_and_ignores_nan() {
        let mut c = controller();
        assert!(!c.on_scroll(-40.0), "clamped to 0, unchanged");
        assert!(c.on_scroll(120.0));
        assert!(!c.on_scroll(f64::NAN));
        assert!(!c.on_scroll(f64::INFINITY));
        assert_eq!(c.scroll_offset(), 120.0);
        assert!(c.on_scroll(-1.0));
        assert_eq!(c.scroll_offset(), 0.0);
    }

    #[test]
    fn resize_sanitizes() {
        let mut c = controller();
        assert!(c.on_resize(600.0, -5.0));
        assert_eq!(c.viewport(), Size::new(600.0, 0.0));
        assert!(!c.on_resize(f64::NAN, 1.0));
    }

    #[test]
    fn msg_from_event() {
        assert_eq!(
            RevealMsg::from_event(&ViewportEvent::Scroll { offset: 3.0 }),
            Some(RevealMsg::Scrolled(3.0))
        );
        assert_eq!(
            RevealMsg::from_event(&ViewportEvent::Layout {
                id: 4,
                rect: Rect::default()
            }),
            Some(RevealMsg::LayoutChanged {
                id: ElementId(4),
                rect: Rect::default()
            })
        );
        assert_eq!(
            RevealMsg::from_event(&ViewportEvent::Click(
                folio_core::event::ClickTarget::MenuButton
            )),
            None
        );
    }

    #[test]
    fn element_style_uses_stagger() {
        let mut c = controller();
        c.register_revealable(ElementId(1), Rect::default(), 3);
        let style = c.element_style(ElementId(1)).unwrap();
        assert_eq!(style.get("transition-delay"), Some("0.2s"));
        assert!(c.element_style(ElementId(2)).is_none());
    }

    #[test]
    fn flush_without_observer_is_noop() {
        let mut c = controller();
        c.register_revealable(ElementId(1), Rect::new(0.0, 0.0, 10.0, 10.0), 1);
        c.on_scroll(10.0);
        assert_eq!(c.flush_intersections(), 0);
        assert!(!c.is_revealed(ElementId(1)));
    }

    #[test]
    fn update_layout_unknown_id() {
        let mut c = controller();
        assert!(!c.update_layout(ElementId(9), Rect::default()));
        assert!(!c.unregister_revealable(ElementId(9)));
    }

    #[test]
    fn snapshot_lookup() {
        let mut c = controller();
        c.register_revealable(ElementId(3), Rect::default(), 1);
        c.register_revealable(ElementId(1), Rect::default(), 2);
        c.on_intersection(ElementId(3), true);
        let snap = c.snapshot();
        assert_eq!(snap.phase(ElementId(3)), Some(RevealPhase::Revealed));
        assert_eq!(snap.phase(ElementId(1)), Some(RevealPhase::Hidden));
        assert_eq!(snap.phase(ElementId(2)), None);
        assert_eq!(snap.revealed_count(), 1);
        assert_eq!(snap.element(ElementId(1)).unwrap().delay, Duration::from_millis(100));
    }
}
