#![forbid(unsafe_code)]

//! Portfolio content and the static page renderer.
//!
//! # Role in folio
//! `folio-content` turns compiled-in data ([`data`]) and a runtime
//! [`folio_runtime::RevealSnapshot`] into markup. Nothing here holds state:
//! [`StaticContentRenderer::render`] is a pure function, so re-rendering
//! the same view yields byte-identical HTML.

pub mod data;
pub mod markup;
pub mod render;
pub mod stylesheet;

pub use markup::{Element, Node};
pub use render::{PageView, RenderedPage, RevealSlot, StaticContentRenderer};
pub use stylesheet::stylesheet;
