#![forbid(unsafe_code)]

//! folio public facade crate.
//!
//! Re-exports the types a host needs to serve the portfolio page and drive
//! its scroll effects, plus a small prelude.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use folio_core::capabilities::ViewportCapabilities;
pub use folio_core::event::{ClickTarget, EventKind, ViewportEvent};
pub use folio_core::geometry::{Point, Rect, Size};
pub use folio_core::section::Section;

// --- Runtime re-exports ----------------------------------------------------

pub use folio_runtime::{
    ElementId, EventHub, MenuMsg, MenuToggle, RevealConfig, RevealConfigError, RevealFallback,
    RevealMsg, RevealPhase, RevealSnapshot, StaggerMode, StyleDecl, SubscriptionToken,
    ViewportRevealController,
};

// --- Content re-exports ----------------------------------------------------

pub use folio_content::{PageView, RenderedPage, RevealSlot, StaticContentRenderer};

// --- Web re-exports --------------------------------------------------------

pub use folio_web::{
    HostCommand, PageMsg, PatchTarget, StepResult, StylePatch, WebHost, WebHostError, WebOutputs,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for folio hosts.
#[derive(Debug)]
pub enum Error {
    /// The reveal configuration failed to load or validate.
    Config(RevealConfigError),
    /// The page driver rejected an operation.
    Host(WebHostError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Host(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Host(err) => Some(err),
        }
    }
}

impl From<RevealConfigError> for Error {
    fn from(err: RevealConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<WebHostError> for Error {
    fn from(err: WebHostError) -> Self {
        Self::Host(err)
    }
}

/// Standard result type for folio APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Entry points ---------------------------------------------------------

/// Viewport assumed for server-side rendering.
pub const DEFAULT_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// The initial HTML document: every revealable hidden, menu collapsed.
pub fn render_static_page(config: RevealConfig) -> Result<String> {
    let config = config.validated()?;
    let renderer = StaticContentRenderer::new(config.clone());
    let controller =
        ViewportRevealController::new(config, ViewportCapabilities::modern(), DEFAULT_VIEWPORT);
    Ok(renderer.render_document(&PageView::new(controller.snapshot(), false)))
}

/// Validate `config` and mount a page driver for a live viewport.
pub fn mount_page(config: RevealConfig, caps: ViewportCapabilities, viewport: Size) -> Result<WebHost> {
    let mut host = WebHost::new(config.validated()?, caps, viewport);
    host.mount()?;
    Ok(host)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ClickTarget, Error, HostCommand, MenuToggle, PatchTarget, RevealConfig, Result, Section,
        Size, StylePatch, ViewportCapabilities, ViewportEvent, ViewportRevealController, WebHost,
        mount_page, render_static_page,
    };

    pub use crate::{content, core, runtime, web};
}

pub use folio_content as content;
pub use folio_core as core;
pub use folio_runtime as runtime;
pub use folio_web as web;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_page_starts_hidden() {
        let html = render_static_page(RevealConfig::default()).expect("render");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("data-reveal-id=\"16\""));
        assert!(!html.contains("data-reveal-id=\"17\""));
        assert!(html.contains("max-height: 0"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = RevealConfig::default();
        config.observer.threshold = 2.0;
        let err = render_static_page(config).expect_err("invalid");
        assert!(matches!(err, Error::Config(RevealConfigError::Validation(_))));
        assert!(err.to_string().starts_with("validation errors:"));
    }

    #[test]
    fn mount_page_presents_first_frame() {
        let host = mount_page(
            RevealConfig::default(),
            ViewportCapabilities::modern(),
            DEFAULT_VIEWPORT,
        )
        .expect("mount");
        assert!(host.is_mounted());
        assert!(host.outputs().last_html.is_some());
    }

    #[test]
    fn host_errors_convert() {
        let err = Error::from(WebHostError::NotMounted);
        assert_eq!(err.to_string(), "page is not mounted");
    }
}
