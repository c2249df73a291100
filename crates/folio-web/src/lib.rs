#![forbid(unsafe_code)]

//! Web backend for the folio page.
//!
//! The browser side is a thin shim: it forwards DOM events into a
//! [`WebEventSource`], calls [`page_host::WebHost::step`], and applies the
//! resulting [`StylePatch`]es and [`HostCommand`]s. All page state lives
//! on the Rust side.
//!
//! Design goals:
//! - **Host-driven**: no timers or threads; the host decides when to step.
//! - **Deterministic**: the same event sequence yields the same patches.
//! - **Incremental**: after the first frame only changed styles are sent.

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use folio_core::event::ViewportEvent;
use folio_core::event_coalescer::EventCoalescer;
use folio_runtime::ElementId;

#[cfg(feature = "input-parser")]
pub mod input_parser;
pub mod page_host;

pub use page_host::{PageMsg, StepResult, WebHost};

/// Web host error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebHostError {
    /// Generic unsupported operation.
    Unsupported(&'static str),
    /// The page was stepped before `mount` or after `unmount`.
    NotMounted,
}

impl fmt::Display for WebHostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(msg) => write!(f, "unsupported: {msg}"),
            Self::NotMounted => f.write_str("page is not mounted"),
        }
    }
}

impl std::error::Error for WebHostError {}

/// Host-driven event queue.
///
/// The host pushes decoded DOM events; [`WebEventSource::drain_coalesced`]
/// hands them to the page once per step.
#[derive(Debug, Default)]
pub struct WebEventSource {
    queue: VecDeque<ViewportEvent>,
    coalescer: EventCoalescer,
}

impl WebEventSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Push a canonical event.
    pub fn push_event(&mut self, event: ViewportEvent) {
        self.queue.push_back(event);
    }

    /// Drain all queued events in FIFO order.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ViewportEvent> + '_ {
        self.queue.drain(..)
    }

    /// Drain all queued events, merging bursts of scrolls, pointer moves,
    /// and resizes.
    pub fn drain_coalesced(&mut self) -> Vec<ViewportEvent> {
        let batch: Vec<_> = self.queue.drain(..).collect();
        self.coalescer.coalesce_batch(batch)
    }
}

/// DOM node a style patch applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatchTarget {
    /// A revealable node, by its `data-reveal-id`.
    Reveal(ElementId),
    /// A parallax layer, by its `data-parallax-layer` index.
    ParallaxLayer(usize),
    /// The cursor follower.
    Follower,
    /// The collapsible mobile menu panel.
    MobileMenu,
}

impl PatchTarget {
    /// CSS selector matching the node in the rendered page.
    #[must_use]
    pub fn selector(&self) -> String {
        match self {
            Self::Reveal(id) => format!("[data-reveal-id=\"{id}\"]"),
            Self::ParallaxLayer(index) => format!("[data-parallax-layer=\"{index}\"]"),
            Self::Follower => "[data-follower]".to_owned(),
            Self::MobileMenu => "#mobile-menu".to_owned(),
        }
    }
}

/// Replace the inline `style` attribute of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePatch {
    pub target: PatchTarget,
    pub css: String,
}

/// Side effects the host performs on the page's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Scroll the section with this anchor id into view.
    ScrollIntoView { anchor: &'static str, smooth: bool },
}

/// Captured outputs for host consumption.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WebOutputs {
    /// Full document from the most recent render, if one happened.
    pub last_html: Option<String>,
    /// Patches produced by the most recent present.
    pub last_patches: Vec<StylePatch>,
    /// Commands queued since the host last took outputs.
    pub commands: Vec<HostCommand>,
    /// Number of frames presented.
    pub frames: u64,
}

/// Presenter that diffs dynamic styles between frames.
///
/// The first frame after creation (or [`WebPresenter::reset`]) emits every
/// style; later frames emit only styles that changed.
#[derive(Debug, Default, Clone)]
pub struct WebPresenter {
    previous: BTreeMap<PatchTarget, String>,
    outputs: WebOutputs,
}

impl WebPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn outputs(&self) -> &WebOutputs {
        &self.outputs
    }

    pub fn outputs_mut(&mut self) -> &mut WebOutputs {
        &mut self.outputs
    }

    /// Take captured outputs, leaving empty defaults.
    pub fn take_outputs(&mut self) -> WebOutputs {
        std::mem::take(&mut self.outputs)
    }

    /// Forget the previous frame so the next present is a full one.
    pub fn reset(&mut self) {
        self.previous.clear();
    }

    /// Whether the next present emits every style.
    #[must_use]
    pub fn is_first_frame(&self) -> bool {
        self.previous.is_empty()
    }

    /// Record a frame and return the patches that differ from the last one.
    pub fn present<I>(&mut self, styles: I) -> Vec<StylePatch>
    where
        I: IntoIterator<Item = (PatchTarget, String)>,
    {
        let mut patches = Vec::new();
        for (target, css) in styles {
            if self.previous.get(&target) != Some(&css) {
                patches.push(StylePatch {
                    target,
                    css: css.clone(),
                });
                self.previous.insert(target, css);
            }
        }
        self.outputs.last_patches = patches.clone();
        self.outputs.frames = self.outputs.frames.saturating_add(1);
        patches
    }

    /// Store a freshly rendered document.
    pub fn present_html(&mut self, html: String) {
        self.outputs.last_html = Some(html);
    }

    /// Queue a host command.
    pub fn push_command(&mut self, command: HostCommand) {
        self.outputs.commands.push(command);
    }
}
