//! The single page: every section in order, gated on controller
//! visibility so a fullscreen drill-down collapses the rest of the page.

use dioxus::prelude::*;

use crate::components::{ContactForm, Footer, Hero, NavHeader, PortfolioSection, SpotlightSection};
use crate::context::*;

#[component]
pub fn Home() -> Element {
    let site = use_site();
    let nav = use_nav();

    let spotlight_sections: Vec<_> = site
        .sections
        .iter()
        .filter(|s| s.id != "hero" && s.id != "portfolio" && s.id != "contact")
        .cloned()
        .collect();

    rsx! {
        NavHeader {}
        main {
            if nav.read().section_visible("hero") {
                Hero {}
            }
            if nav.read().section_visible("portfolio") {
                PortfolioSection {}
            }
            for section in spotlight_sections {
                if nav.read().section_visible(&section.id) {
                    SpotlightSection {
                        section_id: section.id.clone(),
                        label: section.label.clone(),
                    }
                }
            }
            if nav.read().section_visible("contact") {
                ContactForm {}
            }
        }
        Footer {}
    }
}
