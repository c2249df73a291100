#![forbid(unsafe_code)]

//! The page driver: one host step per animation frame.
//!
//! [`WebHost`] owns everything the page needs at runtime: the event hub,
//! the reveal controller, the menu, the renderer, and the presenter.
//!
//! # Execution model
//!
//! 1. `mount()` renders the document once, registers every revealable slot
//!    with a provisional box, mounts the controller, and presents a full
//!    frame.
//! 2. The host pushes DOM events with `push_event()` (or `events_mut()`).
//! 3. `step()` drains the queue (coalescing bursts), routes events through
//!    the hub, applies the resulting messages, delivers intersection
//!    records, and presents the style patches that changed.
//! 4. `unmount()` releases every subscription, drops queued events, and
//!    collapses the menu; nothing from a torn-down session reaches the next
//!    mount.
//!
//! The host replaces provisional boxes with measured ones by pushing
//! `Layout` events.

use std::collections::BTreeMap;

use folio_content::{PageView, RevealSlot, StaticContentRenderer};
use folio_core::capabilities::ViewportCapabilities;
use folio_core::event::{ClickTarget, EventKind, ViewportEvent};
use folio_core::geometry::{Rect, Size};
use folio_core::section::Section;
use folio_runtime::style::{follower_style, menu_panel_style, parallax_style, reveal_style};
use folio_runtime::{
    EventHub, MenuMsg, MenuToggle, RevealConfig, RevealMsg, RevealSnapshot, SubscriptionSet,
    ViewportRevealController,
};

use crate::{HostCommand, PatchTarget, WebEventSource, WebHostError, WebOutputs, WebPresenter};

/// Vertical span reserved per page section in the provisional layout.
const SECTION_SPAN: f64 = 1000.0;
/// Offset of the first revealable inside its section.
const SECTION_LEAD: f64 = 200.0;
/// Distance between consecutive revealables of one section.
const ROW_SPAN: f64 = 150.0;
const ROW_HEIGHT: f64 = 100.0;

/// Messages routed through the page's event hub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageMsg {
    Reveal(RevealMsg),
    Menu(MenuMsg),
    /// The hero call-to-action: scroll to the projects section.
    ExploreWork,
}

impl From<RevealMsg> for PageMsg {
    fn from(msg: RevealMsg) -> Self {
        Self::Reveal(msg)
    }
}

impl From<MenuMsg> for PageMsg {
    fn from(msg: MenuMsg) -> Self {
        Self::Menu(msg)
    }
}

impl PageMsg {
    /// Message for a click, or `None` for targets the browser handles alone.
    #[must_use]
    pub fn from_click(target: &ClickTarget) -> Option<Self> {
        match target {
            ClickTarget::MenuButton => Some(Self::Menu(MenuMsg::Toggle)),
            ClickTarget::NavLink(_) => Some(Self::Menu(MenuMsg::Close)),
            ClickTarget::ExploreWork => Some(Self::ExploreWork),
            ClickTarget::External(_) => None,
        }
    }
}

/// Outcome of a single [`WebHost::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Events handled after coalescing.
    pub events_processed: usize,
    /// Elements revealed during this step.
    pub revealed: usize,
    /// Style patches produced.
    pub patches: usize,
    /// Host commands queued.
    pub commands: usize,
    /// Whether anything visible changed.
    pub rendered: bool,
}

/// Provisional document-space boxes for freshly rendered slots, in slot
/// order.
///
/// Each section gets a fixed span in page order; its revealables stack
/// inside it. Good enough to reveal content in roughly the right order
/// until the host reports measured boxes.
#[must_use]
pub fn provisional_layout(slots: &[RevealSlot], viewport: Size) -> Vec<Rect> {
    let mut rows: BTreeMap<Option<Section>, usize> = BTreeMap::new();
    slots
        .iter()
        .map(|slot| {
            let rank = slot
                .section
                .and_then(|section| Section::PAGE_ORDER.iter().position(|s| *s == section))
                .unwrap_or(0);
            let row = rows.entry(slot.section).or_insert(0);
            let y = rank as f64 * SECTION_SPAN + SECTION_LEAD + *row as f64 * ROW_SPAN;
            *row += 1;
            Rect::new(0.0, y, viewport.width, ROW_HEIGHT)
        })
        .collect()
}

/// Every dynamic inline style of the page, keyed by the node it applies to.
#[must_use]
pub fn dynamic_styles(
    snapshot: &RevealSnapshot,
    menu_open: bool,
    config: &RevealConfig,
) -> Vec<(PatchTarget, String)> {
    let mut styles = Vec::with_capacity(snapshot.elements.len() + snapshot.parallax.len() + 2);
    styles.extend(snapshot.elements.iter().map(|element| {
        (
            PatchTarget::Reveal(element.id),
            reveal_style(element.phase, element.delay, snapshot.degraded, config).to_css(),
        )
    }));
    styles.extend(
        snapshot
            .parallax
            .iter()
            .enumerate()
            .map(|(index, offset)| (PatchTarget::ParallaxLayer(index), parallax_style(*offset).to_css())),
    );
    let follower = snapshot
        .follower
        .as_ref()
        .map_or_else(|| "display: none".to_owned(), |style| follower_style(style).to_css());
    styles.push((PatchTarget::Follower, follower));
    styles.push((PatchTarget::MobileMenu, menu_panel_style(menu_open).to_css()));
    styles
}

/// Host-driven page runtime.
#[derive(Debug)]
pub struct WebHost {
    hub: EventHub<PageMsg>,
    controller: ViewportRevealController,
    menu: MenuToggle,
    renderer: StaticContentRenderer,
    events: WebEventSource,
    presenter: WebPresenter,
    clicks: SubscriptionSet,
    mounted: bool,
}

impl WebHost {
    /// Create an unmounted page for a viewport.
    #[must_use]
    pub fn new(config: RevealConfig, caps: ViewportCapabilities, viewport: Size) -> Self {
        Self {
            hub: EventHub::new(caps),
            renderer: StaticContentRenderer::new(config.clone()),
            controller: ViewportRevealController::new(config, caps, viewport),
            menu: MenuToggle::new(),
            events: WebEventSource::new(),
            presenter: WebPresenter::new(),
            clicks: SubscriptionSet::new(),
            mounted: false,
        }
    }

    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub const fn controller(&self) -> &ViewportRevealController {
        &self.controller
    }

    #[must_use]
    pub const fn menu(&self) -> &MenuToggle {
        &self.menu
    }

    #[must_use]
    pub const fn hub(&self) -> &EventHub<PageMsg> {
        &self.hub
    }

    #[must_use]
    pub const fn renderer(&self) -> &StaticContentRenderer {
        &self.renderer
    }

    pub fn events_mut(&mut self) -> &mut WebEventSource {
        &mut self.events
    }

    #[must_use]
    pub const fn presenter(&self) -> &WebPresenter {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut WebPresenter {
        &mut self.presenter
    }

    /// Captured outputs.
    #[must_use]
    pub const fn outputs(&self) -> &WebOutputs {
        self.presenter.outputs()
    }

    /// Take captured outputs, leaving empty defaults.
    pub fn take_outputs(&mut self) -> WebOutputs {
        self.presenter.take_outputs()
    }

    /// Queue a DOM event for the next step.
    ///
    /// Events arriving while the page is not mounted are dropped.
    pub fn push_event(&mut self, event: ViewportEvent) {
        if self.mounted {
            self.events.push_event(event);
        }
    }

    /// Current page state for rendering.
    #[must_use]
    pub fn view(&self) -> PageView {
        PageView::new(self.controller.snapshot(), self.menu.is_open())
    }

    /// Full document for the current state.
    #[must_use]
    pub fn render_html(&self) -> String {
        self.renderer.render_document(&self.view())
    }

    /// Render, register revealables, subscribe, and present a full frame.
    ///
    /// Returns the number of subscriptions created; `Ok(0)` when already
    /// mounted. Boxes already reported by the host survive a remount.
    pub fn mount(&mut self) -> Result<usize, WebHostError> {
        if self.mounted {
            return Ok(0);
        }

        let page = self.renderer.render(&self.view());
        let viewport = self.controller.viewport();
        for (slot, rect) in page
            .revealables
            .iter()
            .zip(provisional_layout(&page.revealables, viewport))
        {
            if self.controller.registry().get(slot.id).is_none() {
                self.controller
                    .register_revealable(slot.id, rect, slot.sibling_index);
            }
        }

        self.events.drain_events().for_each(drop);
        let mut created = self.controller.mount(&mut self.hub);
        let token = self
            .hub
            .subscribe(EventKind::Click, |event: &ViewportEvent| match event {
                ViewportEvent::Click(target) => PageMsg::from_click(target),
                _ => None,
            })
            .map_err(|_| WebHostError::Unsupported("click events"))?;
        self.clicks.push(token);
        created += 1;
        self.mounted = true;

        self.controller.flush_intersections();
        self.presenter.reset();
        self.present();
        let html = self.render_html();
        self.presenter.present_html(html);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "folio.web",
            subscriptions = created,
            revealables = page.revealables.len(),
            "page mounted"
        );
        Ok(created)
    }

    /// Release every subscription, discard queued events, and collapse the
    /// menu.
    ///
    /// Returns the number released; 0 when not mounted.
    pub fn unmount(&mut self) -> usize {
        if !self.mounted {
            return 0;
        }
        let released = self.clicks.release_all(&mut self.hub) + self.controller.unmount(&mut self.hub);
        self.events.drain_events().for_each(drop);
        self.menu = MenuToggle::new();
        self.mounted = false;
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "folio.web", released, "page unmounted");
        released
    }

    /// Process queued events and present the resulting patches.
    pub fn step(&mut self) -> Result<StepResult, WebHostError> {
        if !self.mounted {
            return Err(WebHostError::NotMounted);
        }

        let events = self.events.drain_coalesced();
        for event in &events {
            self.hub.dispatch(event);
        }
        let mut commands = 0;
        for msg in self.hub.drain_messages() {
            commands += self.update(msg);
        }
        let revealed = self.controller.flush_intersections();
        let patches = self.present();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "folio.web",
            events = events.len(),
            revealed,
            patches,
            "step"
        );
        Ok(StepResult {
            events_processed: events.len(),
            revealed,
            patches,
            commands,
            rendered: patches > 0,
        })
    }

    /// Apply one message; returns the number of host commands it queued.
    fn update(&mut self, msg: PageMsg) -> usize {
        match msg {
            PageMsg::Reveal(msg) => {
                self.controller.update(msg);
                0
            }
            PageMsg::Menu(msg) => {
                self.menu.update(msg);
                0
            }
            PageMsg::ExploreWork => {
                self.presenter.push_command(HostCommand::ScrollIntoView {
                    anchor: Section::Projects.anchor(),
                    smooth: true,
                });
                1
            }
        }
    }

    fn present(&mut self) -> usize {
        let styles = dynamic_styles(
            &self.controller.snapshot(),
            self.menu.is_open(),
            self.renderer.config(),
        );
        self.presenter.present(styles).len()
    }
}
