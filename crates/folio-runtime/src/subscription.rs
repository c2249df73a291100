#![forbid(unsafe_code)]

//! Event subscriptions for viewport event sources.
//!
//! The page host owns one [`EventHub`]. Components subscribe a handler per
//! [`EventKind`] and get back a [`SubscriptionToken`]; the handler maps a raw
//! [`ViewportEvent`] to an optional message, which the hub queues for the
//! host to route through `update()`.
//!
//! # How it works
//!
//! 1. A component calls [`EventHub::subscribe`] while mounting and keeps the
//!    token in a [`SubscriptionSet`].
//! 2. The host calls [`EventHub::dispatch`] for every event, then drains the
//!    queued messages with [`EventHub::drain_messages`].
//! 3. On unmount the component calls [`SubscriptionSet::release_all`]; after
//!    that none of its handlers run again.
//!
//! Everything runs on the host's event loop: handlers are plain `FnMut`, no
//! threads, no locks.

use std::collections::VecDeque;
use std::fmt;

use folio_core::capabilities::ViewportCapabilities;
use folio_core::event::{EventKind, ViewportEvent};

/// A unique identifier for a subscription.
pub type SubId = u64;

/// Handle returned by [`EventHub::subscribe`]; releases the subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(SubId);

impl SubscriptionToken {
    /// Raw subscription id.
    #[must_use]
    pub const fn id(self) -> SubId {
        self.0
    }
}

/// Why a subscription could not be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeError {
    /// The viewport lacks the capability that produces this event kind.
    Unsupported(EventKind),
}

impl fmt::Display for SubscribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(kind) => {
                write!(f, "unsupported event source: {}", kind.dom_name())
            }
        }
    }
}

impl std::error::Error for SubscribeError {}

type Handler<M> = Box<dyn FnMut(&ViewportEvent) -> Option<M>>;

struct Listener<M> {
    token: SubscriptionToken,
    kind: EventKind,
    handler: Handler<M>,
}

/// Routes viewport events to subscribed handlers and queues their messages.
pub struct EventHub<M> {
    caps: ViewportCapabilities,
    next_id: SubId,
    listeners: Vec<Listener<M>>,
    queue: VecDeque<M>,
}

impl<M> fmt::Debug for EventHub<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("caps", &self.caps)
            .field("listeners", &self.listeners.len())
            .field("queued", &self.queue.len())
            .finish()
    }
}

impl<M> EventHub<M> {
    /// Create a hub for a viewport with the given capabilities.
    #[must_use]
    pub fn new(caps: ViewportCapabilities) -> Self {
        Self {
            caps,
            next_id: 1,
            listeners: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Capabilities this hub was created with.
    #[must_use]
    pub const fn capabilities(&self) -> ViewportCapabilities {
        self.caps
    }

    /// Whether the viewport can produce events of `kind`.
    #[must_use]
    pub fn supports(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::PointerMove => self.caps.contains(ViewportCapabilities::POINTER_EVENTS),
            EventKind::Scroll | EventKind::Resize | EventKind::Click | EventKind::Layout => true,
        }
    }

    /// Register `handler` for events of `kind`.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> Result<SubscriptionToken, SubscribeError>
    where
        F: FnMut(&ViewportEvent) -> Option<M> + 'static,
    {
        if !self.supports(kind) {
            return Err(SubscribeError::Unsupported(kind));
        }
        let token = SubscriptionToken(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        tracing::debug!(sub_id = token.0, kind = kind.dom_name(), "Starting subscription");
        self.listeners.push(Listener {
            token,
            kind,
            handler: Box::new(handler),
        });
        Ok(token)
    }

    /// Release a subscription.
    ///
    /// Returns `false` when the token is unknown or was already released;
    /// releasing twice is a no-op.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.token != token);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(sub_id = token.0, "Stopping subscription");
        }
        removed
    }

    /// Run every handler subscribed to the event's kind, in subscription
    /// order, queueing the messages they produce.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&mut self, event: &ViewportEvent) -> usize {
        let kind = event.kind();
        let mut fired = 0;
        for listener in self.listeners.iter_mut().filter(|l| l.kind == kind) {
            fired += 1;
            if let Some(msg) = (listener.handler)(event) {
                self.queue.push_back(msg);
            }
        }
        fired
    }

    /// Drain pending messages produced by handlers.
    pub fn drain_messages(&mut self) -> Vec<M> {
        self.queue.drain(..).collect()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of live subscriptions for one kind.
    #[must_use]
    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.listeners.iter().filter(|l| l.kind == kind).count()
    }
}

/// Tokens owned by one component, released together on teardown.
#[derive(Debug, Default, Clone)]
pub struct SubscriptionSet {
    tokens: Vec<SubscriptionToken>,
}

impl SubscriptionSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a token.
    pub fn push(&mut self, token: SubscriptionToken) {
        self.tokens.push(token);
    }

    /// Number of tracked tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// No tracked tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Release every tracked token against `hub`.
    ///
    /// Idempotent: the set is empty afterwards. Returns how many
    /// subscriptions were actually live.
    pub fn release_all<M>(&mut self, hub: &mut EventHub<M>) -> usize {
        self.tokens
            .drain(..)
            .filter(|token| hub.unsubscribe(*token))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMsg {
        Scrolled(f64),
        Moved,
    }

    fn scroll(offset: f64) -> ViewportEvent {
        ViewportEvent::Scroll { offset }
    }

    #[test]
    fn dispatch_routes_by_kind() {
        let mut hub = EventHub::new(ViewportCapabilities::modern());
        hub.subscribe(EventKind::Scroll, |e| match e {
            ViewportEvent::Scroll { offset } => Some(TestMsg::Scrolled(*offset)),
            _ => None,
        })
        .unwrap();
        hub.subscribe(EventKind::PointerMove, |_| Some(TestMsg::Moved))
            .unwrap();

        assert_eq!(hub.dispatch(&scroll(12.0)), 1);
        assert_eq!(hub.dispatch(&ViewportEvent::Resize { width: 1.0, height: 1.0 }), 0);
        assert_eq!(hub.drain_messages(), vec![TestMsg::Scrolled(12.0)]);
        assert!(hub.drain_messages().is_empty());
    }

    #[test]
    fn handlers_fire_in_subscription_order() {
        let mut hub = EventHub::new(ViewportCapabilities::modern());
        hub.subscribe(EventKind::Scroll, |_| Some(1)).unwrap();
        hub.subscribe(EventKind::Scroll, |_| Some(2)).unwrap();
        hub.dispatch(&scroll(0.0));
        assert_eq!(hub.drain_messages(), vec![1, 2]);
    }

    #[test]
    fn pointer_subscription_requires_capability() {
        let mut hub: EventHub<TestMsg> = EventHub::new(ViewportCapabilities::touch_only());
        let err = hub
            .subscribe(EventKind::PointerMove, |_| Some(TestMsg::Moved))
            .unwrap_err();
        assert_eq!(err, SubscribeError::Unsupported(EventKind::PointerMove));
        assert_eq!(err.to_string(), "unsupported event source: pointermove");
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn unsubscribe_twice_is_noop() {
        let mut hub = EventHub::new(ViewportCapabilities::modern());
        let token = hub.subscribe(EventKind::Scroll, |_| Some(())).unwrap();
        assert!(hub.unsubscribe(token));
        assert!(!hub.unsubscribe(token));
        assert_eq!(hub.dispatch(&scroll(1.0)), 0);
    }

    #[test]
    fn tokens_are_unique() {
        let mut hub = EventHub::new(ViewportCapabilities::modern());
        let a = hub.subscribe(EventKind::Scroll, |_| Some(())).unwrap();
        let b = hub.subscribe(EventKind::Scroll, |_| Some(())).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn release_all_is_idempotent() {
        let mut hub = EventHub::new(ViewportCapabilities::modern());
        let mut set = SubscriptionSet::new();
        set.push(hub.subscribe(EventKind::Scroll, |_| Some(())).unwrap());
        set.push(hub.subscribe(EventKind::Resize, |_| Some(())).unwrap());
        assert_eq!(set.len(), 2);

        assert_eq!(set.release_all(&mut hub), 2);
        assert!(set.is_empty());
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(set.release_all(&mut hub), 0);
    }

    #[test]
    fn release_all_tolerates_already_released_tokens() {
        let mut hub = EventHub::new(ViewportCapabilities::modern());
        let mut set = SubscriptionSet::new();
        let token = hub.subscribe(EventKind::Scroll, |_| Some(())).unwrap();
        set.push(token);
        hub.unsubscribe(token);
        assert_eq!(set.release_all(&mut hub), 0);
    }

    #[test]
    fn stateful_handlers_keep_state_between_events() {
        let mut hub = EventHub::new(ViewportCapabilities::modern());
        let mut seen = 0u32;
        hub.subscribe(EventKind::Scroll, move |_| {
            seen += 1;
            Some(seen)
        })
        .unwrap();
        hub.dispatch(&scroll(0.0));
        hub.dispatch(&scroll(0.0));
        assert_eq!(hub.drain_messages(), vec![1, 2]);
    }
}
