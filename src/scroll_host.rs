//! Applies core scroll effects to the webview document.
//!
//! The controller only decides *what* should happen to the viewport; the
//! functions here do it, deferring two animation frames so a just-shown
//! view has committed its final layout height first, and overriding any
//! global smooth-scroll styling for instant restores.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::{NavigationController, ScrollEffect, Transition};

/// Delay before a deferred inner drill-down runs, long enough for the outer
/// view to have layout.
const FOLLOW_UP_DELAY: Duration = Duration::from_millis(100);

/// Current vertical scroll offset of the document.
pub async fn current_offset() -> f64 {
    let mut eval = document::eval("dioxus.send(window.scrollY);");
    eval.recv::<f64>().await.unwrap_or(0.0)
}

/// Apply one scroll effect after the next render pass completes.
pub async fn apply_scroll(effect: &ScrollEffect) {
    let script = match effect {
        ScrollEffect::JumpTo(offset) => scroll_to_offset(*offset, false),
        ScrollEffect::EaseTo(offset) => scroll_to_offset(*offset, true),
        ScrollEffect::JumpToSection(id) => scroll_to_section(id, false),
        ScrollEffect::EaseToSection(id) => scroll_to_section(id, true),
        ScrollEffect::ToTop => scroll_to_offset(0.0, false),
    };
    let _ = document::eval(&script).await;
}

/// Apply a whole transition: highlight, scroll, deferred follow-up.
pub async fn apply_transition(
    transition: Transition,
    mut nav: Signal<NavigationController>,
    mut active_section: Signal<String>,
) {
    if let Some(section) = transition.active_section {
        active_section.set(section);
    }
    if let Some(effect) = transition.scroll {
        apply_scroll(&effect).await;
    }
    if let Some(follow_up) = transition.follow_up {
        tokio::time::sleep(FOLLOW_UP_DELAY).await;
        let inner = nav.write().apply_follow_up(&follow_up);
        if let Some(effect) = inner.scroll {
            apply_scroll(&effect).await;
        }
    }
}

/// Scroll-spy stream: reports `[offset, current-section-id]` on every
/// document scroll, using the same 200px look-ahead as the section
/// highlighting of the original layout.
pub fn watch_scroll() -> document::Eval {
    document::eval(
        r#"
        window.addEventListener('scroll', () => {
            let current = '';
            document.querySelectorAll('section[id]').forEach((section) => {
                if (window.scrollY >= section.offsetTop - 200) {
                    current = section.id;
                }
            });
            dioxus.send([window.scrollY, current]);
        });
        "#,
    )
}

fn scroll_to_offset(offset: f64, smooth: bool) -> String {
    let behavior = if smooth { "smooth" } else { "auto" };
    format!(
        r#"
        const y = {offset};
        requestAnimationFrame(() => requestAnimationFrame(() => {{
            const html = document.documentElement;
            const prev = html.style.scrollBehavior;
            html.style.scrollBehavior = '{behavior}';
            window.scrollTo({{ top: y, behavior: '{behavior}' }});
            requestAnimationFrame(() => {{
                html.style.scrollBehavior = prev;
            }});
        }}));
        "#
    )
}

fn scroll_to_section(id: &str, smooth: bool) -> String {
    let behavior = if smooth { "smooth" } else { "auto" };
    // Unknown section ids are an absent feature, not an error.
    format!(
        r#"
        const target = document.getElementById('{id}');
        if (target) {{
            requestAnimationFrame(() => requestAnimationFrame(() => {{
                const html = document.documentElement;
                const prev = html.style.scrollBehavior;
                html.style.scrollBehavior = '{behavior}';
                window.scrollTo({{ top: target.offsetTop, behavior: '{behavior}' }});
                requestAnimationFrame(() => {{
                    html.style.scrollBehavior = prev;
                }});
            }}));
        }}
        "#
    )
}
