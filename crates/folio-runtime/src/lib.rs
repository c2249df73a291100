#![forbid(unsafe_code)]

//! folio runtime
//!
//! State machines behind the portfolio page's scroll-driven effects.
//!
//! # Key Components
//!
//! - [`ViewportRevealController`] - Scroll/pointer/viewport state, one-shot
//!   reveals, parallax offsets and the cursor follower
//! - [`MenuToggle`] - Mobile navigation open/closed state
//! - [`EventHub`] - Explicit event subscriptions with release tokens
//! - [`IntersectionObserver`] - Software viewport-intersection detection
//! - [`RevealConfig`] - Policy-as-data configuration (TOML/JSON behind
//!   `policy-config`)
//!
//! # Role in folio
//! `folio-runtime` sits between the input layer (`folio-core`) and the
//! renderer (`folio-content`). The host feeds events into an [`EventHub`],
//! routes the queued messages through `update()`, then renders from a
//! [`RevealSnapshot`].
//!
//! # Concurrency
//! Everything is single-threaded and host-driven. Handlers run to completion
//! on the host's event loop; there are no threads or locks.

pub mod config;
pub mod controller;
pub mod follower;
pub mod intersection;
pub mod menu;
pub mod parallax;
pub mod reveal;
pub mod stagger;
pub mod style;
pub mod subscription;

pub use config::{RevealConfig, RevealConfigError, RevealFallback, StaggerMode};
pub use controller::{ElementView, Lifecycle, RevealMsg, RevealSnapshot, ViewportRevealController};
pub use follower::{CursorFollower, FollowerStyle, PointerState};
pub use intersection::{IntersectionEntry, IntersectionObserver, ObserverOptions};
pub use menu::{MenuMsg, MenuToggle};
pub use parallax::{LayerOffset, ParallaxField, ParallaxLayer};
pub use reveal::{ElementId, RevealPhase, RevealRegistry, RevealTransition};
pub use stagger::StaggerPolicy;
pub use style::StyleDecl;
pub use subscription::{EventHub, SubId, SubscribeError, SubscriptionSet, SubscriptionToken};
