//! Card control buttons: music and confetti toggles.

use birthday_core::CardControls;
use dioxus::prelude::*;

/// Top-right toggle buttons on the card
///
/// The music button shows what a click does (🔇 mutes, 🎵 plays); the
/// confetti button shows 🎊 while confetti is up and ✨ while hidden.
#[component]
pub fn CardControlsBar(controls: Signal<CardControls>) -> Element {
    let mut controls = controls;
    let current = *controls.read();

    let music_icon = if current.playback().is_playing() { "🔇" } else { "🎵" };
    let music_label = if current.playback().is_playing() {
        "Pause music"
    } else {
        "Play music"
    };
    let confetti_icon = if current.confetti_visible() { "🎊" } else { "✨" };
    let confetti_label = if current.confetti_visible() {
        "Hide confetti"
    } else {
        "Show confetti"
    };

    rsx! {
        div { class: "card-controls",
            button {
                class: "card-controls__button",
                title: "{music_label}",
                "aria-label": "{music_label}",
                onclick: move |_| {
                    controls.write().toggle_music();
                },
                "{music_icon}"
            }
            button {
                class: "card-controls__button",
                title: "{confetti_label}",
                "aria-label": "{confetti_label}",
                onclick: move |_| {
                    controls.write().toggle_confetti();
                },
                "{confetti_icon}"
            }
        }
    }
}
