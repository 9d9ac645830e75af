use dioxus::prelude::*;
use portfolio_core::FOOTER_SECTION;

use crate::context::use_nav;

/// Page footer. Hidden along with the other sections while a fullscreen
/// view is up.
#[component]
pub fn Footer() -> Element {
    let nav = use_nav();

    if !nav.read().section_visible(FOOTER_SECTION) {
        return rsx! {};
    }

    rsx! {
        footer { id: "{FOOTER_SECTION}", class: "footer",
            p { "© 2026 Portfolio Studio. Built with Rust and Dioxus." }
        }
    }
}
