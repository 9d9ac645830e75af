//! Fullscreen image viewer over everything else.
//!
//! Paging, zoom and pan state live in the core; this component feeds it
//! pointer, touch and control input and renders the resulting transform.

use dioxus::document;
use dioxus::prelude::*;

use crate::context::*;

#[component]
pub fn Lightbox() -> Element {
    let mut lightbox = use_lightbox();

    if !lightbox.read().is_open() {
        return rsx! {};
    }

    let state = lightbox.read().clone();
    let Some(image) = state.current().cloned() else {
        return rsx! {};
    };
    let counter = state.counter().unwrap_or_default();
    let title = state.title().unwrap_or_default().to_string();
    let transform = state.transform();
    let cursor = state.cursor();
    let zoomed = state.is_zoomed();
    let frame_class = match state.orientation_class() {
        Some(class) => format!("lightbox-frame {class}"),
        None => "lightbox-frame".to_string(),
    };

    // Natural dimensions arrive once the webview has decoded the image.
    let measure = move |_| {
        let mut lightbox = lightbox;
        spawn(async move {
            let mut eval = document::eval(
                r#"
                const img = document.getElementById('lightbox-image');
                dioxus.send([img ? img.naturalWidth : 0, img ? img.naturalHeight : 0]);
                "#,
            );
            if let Ok((width, height)) = eval.recv::<(f64, f64)>().await {
                lightbox.write().set_image_dimensions(width, height);
            }
        });
    };

    let download_src = image.src.clone();
    let download = move |_| {
        let src = download_src.clone();
        spawn(async move {
            let script = format!(
                r#"
                const a = document.createElement('a');
                a.href = '{src}';
                a.download = '{name}';
                a.click();
                "#,
                name = src.rsplit('/').next().unwrap_or("image.png"),
            );
            let _ = document::eval(&script).await;
        });
    };

    rsx! {
        div { class: "lightbox-overlay",
            button {
                class: "lightbox-close",
                "aria-label": "Close",
                onclick: move |_| lightbox.write().close(),
                "×"
            }
            if state.has_navigation() {
                button {
                    class: "lightbox-nav prev",
                    "aria-label": "Previous image",
                    onclick: move |_| lightbox.write().prev(),
                    "‹"
                }
                button {
                    class: "lightbox-nav next",
                    "aria-label": "Next image",
                    onclick: move |_| lightbox.write().next(),
                    "›"
                }
            }
            div { class: "{frame_class}",
                img {
                    id: "lightbox-image",
                    src: "{image.src}",
                    alt: "{image.alt}",
                    style: "transform: {transform}; cursor: {cursor};",
                    draggable: "false",
                    onload: measure,
                    onclick: move |_| {
                        if !zoomed {
                            lightbox.write().zoom_in();
                        }
                    },
                    onmousedown: move |evt| {
                        let point = evt.client_coordinates();
                        lightbox.write().begin_drag(point.x, point.y);
                    },
                    onmousemove: move |evt| {
                        let point = evt.client_coordinates();
                        lightbox.write().drag_to(point.x, point.y);
                    },
                    onmouseup: move |_| lightbox.write().end_drag(),
                    onmouseleave: move |_| lightbox.write().end_drag(),
                    ontouchstart: move |evt| {
                        if let Some(touch) = evt.touches().first() {
                            lightbox.write().touch_start(touch.client_coordinates().x);
                        }
                    },
                    ontouchend: move |evt| {
                        if let Some(touch) = evt.touches_changed().first() {
                            lightbox.write().touch_end(touch.client_coordinates().x);
                        }
                    },
                }
            }
            div { class: "lightbox-caption",
                div { "{title}" }
                div { class: "lightbox-counter", "{counter}" }
            }
            div { class: "lightbox-controls",
                button {
                    "aria-label": "Zoom out",
                    onclick: move |_| lightbox.write().zoom_out(),
                    "−"
                }
                button {
                    "aria-label": "Reset zoom",
                    onclick: move |_| lightbox.write().reset_zoom(),
                    "1:1"
                }
                button {
                    "aria-label": "Zoom in",
                    onclick: move |_| lightbox.write().zoom_in(),
                    "+"
                }
                button { "aria-label": "Download image", onclick: download, "⬇" }
            }
        }
    }
}
