//! Portfolio Studio Core Library
//!
//! Interaction core for a personal portfolio application: view-stack
//! navigation with scroll-position restoration, spotlight overlays, an
//! image lightbox, theme persistence and the contact submission call.
//!
//! ## Overview
//!
//! The centerpiece is the [`nav::NavigationController`]: a small state
//! machine over the static [`view::ViewRegistry`] that tracks nested
//! drill-down views and restores the exact prior scroll offset when the
//! user backs out — including the cross-cutting entry points (dropdown
//! shortcuts, keyboard escape, cross-close vs. back-navigate). Everything
//! here is pure state; the app layer feeds in viewport offsets and applies
//! the returned [`nav::Transition`] values to the document.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{NavigationController, SiteMap, SectionDef};
//!
//! let site = SiteMap {
//!     sections: vec![SectionDef::new("hero", "Home")],
//!     ..SiteMap::default()
//! };
//! let mut nav = NavigationController::new(site.build_registry());
//!
//! // Unknown targets are defined no-ops, never errors.
//! let transition = nav.enter_category("missing", 0.0, None, false);
//! assert_eq!(transition.scroll, None);
//! ```

pub mod contact;
pub mod error;
pub mod lightbox;
pub mod nav;
pub mod scroll;
pub mod site;
pub mod theme;
pub mod view;

// Re-exports
pub use contact::{ContactClient, ContactMessage};
pub use error::{PortfolioError, PortfolioResult};
pub use lightbox::{GalleryImage, LightboxState, Orientation};
pub use nav::{
    FollowUp, FollowUpAction, FullscreenMode, NavContext, NavigationController, SpotlightClose,
    Transition, PORTFOLIO_SECTION,
};
pub use scroll::{ScrollEffect, ScrollStack};
pub use site::{
    CategoryDef, ItemDef, SectionDef, SiteMap, SpotlightDef, SpotlightGroup, FOOTER_SECTION,
};
pub use theme::{Theme, ThemeStore};
pub use view::{View, ViewKind, ViewRegistry};
