//! Spotlight sections: in-page card grids whose entries open fullscreen
//! biographical overlays.
//!
//! A soft back (button or backdrop) returns to where the section was; the
//! corner cross always restores the saved offset and clears any shortcut
//! context.

use dioxus::prelude::*;
use portfolio_core::{SpotlightClose, SpotlightDef, SpotlightGroup};

use crate::context::*;
use crate::scroll_host;

#[component]
pub fn SpotlightSection(section_id: String, label: String) -> Element {
    let site = use_site();

    let Some(group) = site
        .spotlights
        .iter()
        .find(|group| group.section == section_id)
        .cloned()
    else {
        return rsx! {
            section { id: "{section_id}", h2 { "{label}" } }
        };
    };

    rsx! {
        section { id: "{section_id}",
            h2 { "{label}" }
            div { class: "card-grid",
                for entry in group.entries.clone() {
                    SpotlightCard { entry: entry }
                }
            }
            for entry in group.entries.clone() {
                SpotlightOverlay { group: group.clone(), entry: entry }
            }
        }
    }
}

#[component]
fn SpotlightCard(entry: SpotlightDef) -> Element {
    let nav = use_nav();
    let active_section = use_active_section();

    let open = move |entry_id: String| {
        let mut nav = nav;
        spawn(async move {
            let offset = scroll_host::current_offset().await;
            let transition = nav.write().open_spotlight(&entry_id, offset, None);
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    let card_id = entry.id.clone();
    let cta_id = entry.id.clone();

    rsx! {
        div {
            class: "card",
            onclick: move |_| open(card_id.clone()),
            h3 { "{entry.title}" }
            p { "{entry.summary}" }
            button {
                class: "cta",
                onclick: move |evt| {
                    evt.stop_propagation();
                    open(cta_id.clone());
                },
                "Read more"
            }
        }
    }
}

#[component]
fn SpotlightOverlay(group: SpotlightGroup, entry: SpotlightDef) -> Element {
    let nav = use_nav();
    let active_section = use_active_section();

    let visible = nav
        .read()
        .registry()
        .get(&entry.id)
        .is_some_and(|view| view.is_visible());
    let overlay_class = if visible {
        "spotlight-overlay show"
    } else {
        "spotlight-overlay"
    };

    let close = move |close: SpotlightClose| {
        let mut nav = nav;
        spawn(async move {
            let transition = nav.write().close_spotlight(close);
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    rsx! {
        div {
            class: "{overlay_class}",
            "aria-hidden": if visible { "false" } else { "true" },
            onclick: move |_| close(SpotlightClose::SoftBack),
            div {
                class: "spotlight-panel",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "spotlight-close",
                    "aria-label": "Close",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        close(SpotlightClose::Cross);
                    },
                    "×"
                }
                h2 { "{entry.title}" }
                p { class: "spotlight-summary", "{entry.summary}" }
                p { "{entry.detail}" }
                button {
                    class: "back-button",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        close(SpotlightClose::SoftBack);
                    },
                    "← Back to {group.section}"
                }
            }
        }
    }
}
