//! Asset Image
//!
//! An `img` that swaps itself for a text placeholder if the asset fails to
//! load. Missing artwork is cosmetic, so the failure is only logged.

use dioxus::prelude::*;

/// Image with a text fallback
///
/// # Examples
///
/// ```rust
/// rsx! {
///     AssetImage {
///         src: "assets/gift-box-top.svg".to_string(),
///         alt: "Gift Box Lid".to_string(),
///         fallback: "🎀".to_string(),
///     }
/// }
/// ```
#[component]
pub fn AssetImage(
    /// Asset path, passed through untouched
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Placeholder text shown if the image cannot be loaded
    #[props(default = "🖼".to_string())]
    fallback: String,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
    /// Optional inline style
    #[props(default = None)]
    style: Option<String>,
) -> Element {
    let mut failed = use_signal(|| false);
    let css_class = class.unwrap_or_default();
    let inline_style = style.unwrap_or_default();
    let missing_src = src.clone();

    rsx! {
        if failed() {
            span {
                class: "asset-placeholder {css_class}",
                style: "{inline_style}",
                title: "{alt}",
                "{fallback}"
            }
        } else {
            img {
                class: "{css_class}",
                style: "{inline_style}",
                src: "{src}",
                alt: "{alt}",
                onerror: move |_| {
                    tracing::debug!(src = %missing_src, "Asset image missing, showing placeholder");
                    failed.set(true);
                },
            }
        }
    }
}
