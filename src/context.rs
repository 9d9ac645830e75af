//! Context providers for Portfolio Studio.
//!
//! The navigation controller, theme, lightbox and site content are provided
//! once by the root component; every entry-point adapter reaches them
//! through these hooks instead of keeping its own copies of state.

use dioxus::prelude::*;
use portfolio_core::{
    ContactClient, LightboxState, NavigationController, SiteMap, Theme, ThemeStore,
};

/// Hook to access the navigation controller from context.
///
/// All transitions funnel through this one signal; adapters never mutate
/// view visibility directly.
pub fn use_nav() -> Signal<NavigationController> {
    use_context::<Signal<NavigationController>>()
}

/// Hook to access the current theme.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the lightbox state.
pub fn use_lightbox() -> Signal<LightboxState> {
    use_context::<Signal<LightboxState>>()
}

/// Section whose nav link is highlighted. Written by the scroll-spy while
/// in Normal mode and by transitions that pin a section.
pub fn use_active_section() -> Signal<String> {
    use_context::<Signal<String>>()
}

/// Static site content declared at startup.
pub fn use_site() -> SiteMap {
    use_context::<SiteMap>()
}

/// Client for the contact endpoint.
pub fn use_contact_client() -> ContactClient {
    use_context::<ContactClient>()
}

/// Store for the persisted theme preference.
pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>()
}
