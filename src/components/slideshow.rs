//! Inline screenshot slideshow with arrows, dot paging and a timed
//! auto-advance that pauses while hovered. Clicking the image hands the
//! gallery to the lightbox.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::GalleryImage;

const AUTO_ADVANCE: Duration = Duration::from_secs(5);

#[component]
pub fn Slideshow(images: Vec<GalleryImage>, on_image_click: EventHandler<usize>) -> Element {
    let mut index = use_signal(|| 0usize);
    let mut hovering = use_signal(|| false);
    let count = images.len();

    use_future(move || async move {
        loop {
            tokio::time::sleep(AUTO_ADVANCE).await;
            if !hovering() && count > 1 {
                index.set((index() + 1) % count);
            }
        }
    });

    if count == 0 {
        return rsx! {};
    }
    // A shrinking gallery can leave the signal past the end.
    let current = index().min(count - 1);
    let image = images[current].clone();

    rsx! {
        div {
            class: "slideshow",
            onmouseenter: move |_| hovering.set(true),
            onmouseleave: move |_| hovering.set(false),
            img {
                src: "{image.src}",
                alt: "{image.alt}",
                onclick: move |_| on_image_click.call(current),
            }
            if count > 1 {
                button {
                    class: "arrow prev",
                    "aria-label": "Previous slide",
                    onclick: move |_| index.set((current + count - 1) % count),
                    "‹"
                }
                button {
                    class: "arrow next",
                    "aria-label": "Next slide",
                    onclick: move |_| index.set((current + 1) % count),
                    "›"
                }
                div { class: "dots",
                    for i in 0..count {
                        button {
                            class: if i == current { "dot active" } else { "dot" },
                            "aria-label": "Go to slide {i + 1}",
                            onclick: move |_| index.set(i),
                        }
                    }
                }
            }
        }
    }
}
