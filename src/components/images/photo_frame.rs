//! Photo Frame
//!
//! Dashed frame for a photo on the card, with a placeholder when the photo
//! is unset or fails to load.

use dioxus::prelude::*;

/// Framed photo
#[component]
pub fn PhotoFrame(
    /// Photo path; `None` shows the "Add Photo" placeholder
    #[props(default = None)]
    photo: Option<String>,
    /// Alt text for accessibility
    alt: String,
    /// Which side of the card the frame sits on ("left" or "right")
    side: &'static str,
) -> Element {
    let mut has_error = use_signal(|| false);

    rsx! {
        div { class: "photo-spot {side}",
            div { class: "photo-frame",
                {match photo {
                    Some(ref src) if !has_error() => rsx! {
                        img {
                            class: "photo-frame__img",
                            src: "{src}",
                            alt: "{alt}",
                            onerror: move |_| has_error.set(true),
                        }
                    },
                    Some(_) => rsx! {
                        div { class: "photo-frame__placeholder",
                            div { class: "photo-frame__icon", "📷" }
                            div { "Photo not found" }
                        }
                    },
                    None => rsx! {
                        div { class: "photo-frame__placeholder",
                            div { class: "photo-frame__icon", "📷" }
                            div { "Add Photo" }
                        }
                    },
                }}
            }
        }
    }
}
