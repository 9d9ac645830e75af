//! Fixed navigation bar: section links, drop-down shortcuts, scroll spy,
//! hamburger menu and the theme switch.

use dioxus::prelude::*;
use portfolio_core::Theme;

use crate::context::*;
use crate::scroll_host;

#[component]
pub fn NavHeader() -> Element {
    let site = use_site();
    let nav = use_nav();
    let active_section = use_active_section();
    let mut scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    // Scroll spy. The navbar condenses past 100px; the active link follows
    // the viewport with a 200px look-ahead, except while a fullscreen view
    // pins its own section.
    use_future(move || async move {
        let mut active_section = active_section;
        let mut eval = scroll_host::watch_scroll();
        while let Ok((offset, current)) = eval.recv::<(f64, String)>().await {
            scrolled.set(offset > 100.0);
            if nav.read().pinned_section().is_none() && !current.is_empty() {
                active_section.set(current);
            }
        }
    });

    let navbar_class = if scrolled() { "navbar scrolled" } else { "navbar" };
    let links_class = if menu_open() {
        "nav-links open"
    } else {
        "nav-links"
    };

    rsx! {
        nav { class: "{navbar_class}",
            div {
                class: "nav-logo",
                onclick: move |_| {
                    let mut nav = nav;
                    spawn(async move {
                        let transition = nav.write().go_to_section("hero");
                        scroll_host::apply_transition(transition, nav, active_section).await;
                    });
                },
                "Portfolio Studio"
            }
            button {
                class: "hamburger",
                "aria-label": "Toggle menu",
                onclick: move |_| menu_open.toggle(),
                "☰"
            }
            ul { class: "{links_class}",
                for section in site.sections.clone() {
                    NavItem {
                        section_id: section.id.clone(),
                        label: section.label.clone(),
                        on_navigate: move |_| menu_open.set(false),
                    }
                }
                li { ThemeSwitch {} }
            }
        }
    }
}

/// One nav link plus its shortcut drop-down, when the section has one.
#[component]
fn NavItem(section_id: String, label: String, on_navigate: EventHandler<()>) -> Element {
    let site = use_site();
    let nav = use_nav();
    let active_section = use_active_section();

    let link_class = if *active_section.read() == section_id {
        "nav-link active"
    } else {
        "nav-link"
    };

    let goto_id = section_id.clone();
    let onclick = move |_| {
        on_navigate.call(());
        let mut nav = nav;
        let id = goto_id.clone();
        spawn(async move {
            let transition = nav.write().go_to_section(&id);
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    let spotlight_dropdown = site
        .spotlights
        .iter()
        .find(|group| group.section == section_id)
        .map(|group| {
            rsx! {
                ul { class: "dropdown",
                    for entry in group.entries.clone() {
                        li {
                            button {
                                class: "dropdown-entry",
                                onclick: {
                                    let entry_id = entry.id.clone();
                                    let group_section = group.section.clone();
                                    move |_| {
                                        on_navigate.call(());
                                        let mut nav = nav;
                                        let id = entry_id.clone();
                                        let section = group_section.clone();
                                        spawn(async move {
                                            let offset = scroll_host::current_offset().await;
                                            let transition = nav
                                                .write()
                                                .open_spotlight(&id, offset, Some(&section));
                                            scroll_host::apply_transition(
                                                transition,
                                                nav,
                                                active_section,
                                            )
                                            .await;
                                        });
                                    }
                                },
                                "{entry.title}"
                            }
                        }
                    }
                }
            }
        });

    rsx! {
        li { class: "nav-item",
            button { class: "{link_class}", onclick: onclick, "{label}" }
            if section_id == "portfolio" {
                PortfolioDropdown { on_navigate: on_navigate }
            }
            {spotlight_dropdown}
        }
    }
}

/// Drill-down shortcuts: each category, with its items nested underneath.
/// Shortcut entries land at the top of the target view and exit back to the
/// portfolio section rather than a saved offset.
#[component]
fn PortfolioDropdown(on_navigate: EventHandler<()>) -> Element {
    let site = use_site();
    let nav = use_nav();
    let active_section = use_active_section();

    let shortcut = move |category: String, item: Option<String>| {
        on_navigate.call(());
        let mut nav = nav;
        spawn(async move {
            let offset = scroll_host::current_offset().await;
            let transition =
                nav.write()
                    .enter_category(&category, offset, item.as_deref(), true);
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    rsx! {
        ul { class: "dropdown",
            for category in site.categories.clone() {
                li {
                    button {
                        class: "dropdown-entry",
                        onclick: {
                            let id = category.id.clone();
                            move |_| shortcut(id.clone(), None)
                        },
                        "{category.title}"
                    }
                }
                for item in category.items.iter().filter(|i| i.external_url.is_none()).cloned() {
                    li {
                        button {
                            class: "dropdown-entry nested",
                            onclick: {
                                let category_id = category.id.clone();
                                let item_id = item.id.clone();
                                move |_| shortcut(category_id.clone(), Some(item_id.clone()))
                            },
                            "{item.title}"
                        }
                    }
                }
            }
        }
    }
}

/// Checkbox-style switch persisting the choice across launches.
#[component]
fn ThemeSwitch() -> Element {
    let mut theme = use_theme();
    let store = use_theme_store();

    let ontoggle = move |_| {
        let next = theme.read().toggled();
        theme.set(next);
        if let Err(error) = store.save(next) {
            tracing::warn!(%error, "failed to persist theme preference");
        }
    };

    rsx! {
        label { class: "theme-switch",
            input {
                r#type: "checkbox",
                checked: theme.read().is_light(),
                onchange: ontoggle,
            }
            span {
                if *theme.read() == Theme::Light { "Light" } else { "Dark" }
            }
        }
    }
}
