use dioxus::prelude::*;

use crate::context::*;
use crate::scroll_host;

#[component]
pub fn Hero() -> Element {
    let nav = use_nav();
    let active_section = use_active_section();

    let onclick = move |_| {
        let mut nav = nav;
        spawn(async move {
            let transition = nav.write().go_to_section("portfolio");
            scroll_host::apply_transition(transition, nav, active_section).await;
        });
    };

    rsx! {
        section { id: "hero", class: "hero",
            h1 { "Hi, I build things for screens." }
            p { class: "tagline",
                "Apps, software and visual design — a decade of shipping projects \
                 from first sketch to production."
            }
            div {
                button { class: "cta", onclick: onclick, "See my work" }
            }
        }
    }
}
