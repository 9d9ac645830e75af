//! Portfolio section: category cards, the fullscreen category drill-down
//! and the item detail level beneath it.

use dioxus::prelude::*;
use portfolio_core::{CategoryDef, ItemDef};

use crate::components::Slideshow;
use crate::context::*;
use crate::scroll_host;

#[component]
pub fn PortfolioSection() -> Element {
    let site = use_site();
    let nav = use_nav();

    let grid_visible = nav.read().categories_grid_visible();
    let active_category = nav.read().active_category().map(str::to_string);

    rsx! {
        section { id: "portfolio",
            if grid_visible {
                h2 { "Portfolio" }
                div { class: "card-grid",
                    for category in site.categories.clone() {
                        CategoryCard { category: category }
                    }
                }
            }
            if let Some(category_id) = active_category {
                if let Some(category) = site.category(&category_id).cloned() {
                    CategoryDetail { category: category }
                }
            }
        }
    }
}

#[component]
fn CategoryCard(category: CategoryDef) -> Element {
    let nav = use_nav();
    let active_section = use_active_section();

    let category_id = category.id.clone();
    let onclick = move |_| {
        let mut nav = nav;
        let id = category_id.clone();
        spawn(async move {
            let offset = scroll_host::current_offset().await;
            let transition = nav.write().enter_category(&id, offset, None, false);
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    rsx! {
        div { class: "card", onclick: onclick,
            h3 { "{category.title}" }
            p { "{category.tagline}" }
        }
    }
}

#[component]
fn CategoryDetail(category: CategoryDef) -> Element {
    let nav = use_nav();
    let active_section = use_active_section();

    let grid_visible = nav.read().item_grid_visible(&category.id);
    let active_item = nav.read().active_item().map(str::to_string);

    let onback = move |_| {
        let mut nav = nav;
        spawn(async move {
            let transition = nav.write().exit_portfolio();
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    rsx! {
        div { class: "detail-view",
            if grid_visible {
                button { class: "back-button", onclick: onback, "← All categories" }
                h2 { "{category.title}" }
                p { class: "detail-tagline", "{category.tagline}" }
                div { class: "card-grid",
                    for item in category.items.clone() {
                        ItemCard { item: item }
                    }
                }
            }
            if let Some(item_id) = active_item {
                if let Some(item) = category.items.iter().find(|i| i.id == item_id).cloned() {
                    ItemDetail { item: item }
                }
            }
        }
    }
}

/// Item card. External items open their link in the system browser instead
/// of drilling down.
#[component]
fn ItemCard(item: ItemDef) -> Element {
    let nav = use_nav();
    let active_section = use_active_section();

    if let Some(url) = item.external_url.clone() {
        return rsx! {
            a { class: "card", href: "{url}", target: "_blank",
                h3 { "{item.title} ↗" }
                p { "{item.summary}" }
            }
        };
    }

    let item_id = item.id.clone();
    let onclick = move |_| {
        let mut nav = nav;
        let id = item_id.clone();
        spawn(async move {
            let offset = scroll_host::current_offset().await;
            let transition = nav.write().enter_item(&id, offset);
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    rsx! {
        div { class: "card", onclick: onclick,
            h3 { "{item.title}" }
            p { "{item.summary}" }
        }
    }
}

#[component]
fn ItemDetail(item: ItemDef) -> Element {
    let nav = use_nav();
    let active_section = use_active_section();
    let mut lightbox = use_lightbox();

    let onback = move |_| {
        let mut nav = nav;
        spawn(async move {
            let transition = nav.write().back_to_item_grid();
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    let gallery = item.screenshots.clone();
    let on_image_click = move |index: usize| {
        lightbox.write().open(gallery.clone(), index);
    };

    rsx! {
        div { class: "detail-view",
            button { class: "back-button", onclick: onback, "← Back to items" }
            h2 { "{item.title}" }
            p { class: "detail-tagline", "{item.summary}" }
            if !item.screenshots.is_empty() {
                Slideshow {
                    images: item.screenshots.clone(),
                    on_image_click: on_image_click,
                }
            }
        }
    }
}
