use dioxus::prelude::*;
use portfolio_core::{
    ContactClient, LightboxState, NavigationController, Theme, ThemeStore,
};

use crate::components::Lightbox;
use crate::pages::Home;
use crate::scroll_host;
use crate::theme::GLOBAL_STYLES;
use crate::{content, context::*};

/// Root application component.
///
/// Provides global styles, the navigation controller, theme, lightbox and
/// content contexts, and routes keyboard input to whichever overlay is
/// open.
#[component]
pub fn App() -> Element {
    let site = use_context_provider(content::site);
    let theme_store = use_context_provider(|| ThemeStore::new(&crate::get_data_dir()));
    use_context_provider(|| ContactClient::new(crate::get_contact_endpoint()));

    let registry = site.build_registry();
    let nav: Signal<NavigationController> =
        use_signal(move || NavigationController::new(registry));
    let theme: Signal<Theme> = use_signal(move || theme_store.load().unwrap_or_default());
    let lightbox: Signal<LightboxState> = use_signal(LightboxState::new);
    let active_section: Signal<String> = use_signal(|| "hero".to_string());

    use_context_provider(|| nav);
    use_context_provider(|| theme);
    use_context_provider(|| lightbox);
    use_context_provider(|| active_section);

    let mut nav = nav;
    let mut lightbox = lightbox;

    // Keyboard surface: the lightbox consumes its keys first; otherwise
    // Escape soft-closes an open spotlight.
    let onkeydown = move |evt: KeyboardEvent| {
        let Some(key) = key_name(&evt.key()) else {
            return;
        };
        if lightbox.read().is_open() {
            if lightbox.write().handle_key(&key) {
                evt.stop_propagation();
            }
            return;
        }
        if key == "Escape" {
            spawn(async move {
                let transition = nav.write().handle_escape();
                scroll_host::apply_transition(transition, nav, active_section).await;
            });
        }
    };

    let theme_class = if theme().is_light() {
        "app light-theme"
    } else {
        "app"
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "{theme_class}",
            "data-theme": theme().as_str(),
            tabindex: "0",
            onkeydown: onkeydown,

            Home {}
            Lightbox {}
        }
    }
}

/// Map a keyboard event to the key names the core understands.
fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Escape => Some("Escape".to_string()),
        Key::ArrowLeft => Some("ArrowLeft".to_string()),
        Key::ArrowRight => Some("ArrowRight".to_string()),
        Key::Character(c) => Some(c.clone()),
        _ => None,
    }
}
