#![forbid(unsafe_code)]

//! Core: viewport events, geometry, capabilities, and easing curves.
//!
//! # Role in folio
//! `folio-core` is the input layer. It defines the canonical events the host
//! (a browser shim or a test) pushes into the page runtime, the geometry used
//! for intersection math, and the capability flags that decide which visual
//! enhancements are available.
//!
//! # Primary responsibilities
//! - **ViewportEvent**: scroll, pointer, resize, click, and layout reports.
//! - **Geometry**: `f64` CSS-pixel rectangles with CSS margin semantics.
//! - **Capabilities**: which platform facilities exist (intersection
//!   detection, pointer events, hover).
//! - **Easing**: cubic-bezier timing curves shared by style rules.
//! - **Coalescing**: latest-wins merging of high-frequency events.
//!
//! # How it fits in the system
//! `folio-runtime` consumes these types to drive the reveal controller;
//! `folio-content` only needs [`section::Section`] and geometry.

pub mod capabilities;
pub mod easing;
pub mod event;
pub mod event_coalescer;
pub mod geometry;
pub mod section;

pub use capabilities::ViewportCapabilities;
pub use event::{ClickTarget, EventKind, ViewportEvent};
pub use geometry::{Insets, Point, Rect, Size};
pub use section::Section;
