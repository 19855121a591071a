//! Birthday card page: message card with music, confetti and photos.

use birthday_core::confetti::scatter;
use birthday_core::{AutoplayOutcome, CardControls, Viewport};
use dioxus::prelude::*;

use crate::components::{CardControlsBar, ConfettiOverlay, PhotoFrame};
use crate::context::use_greeting;
use crate::theme::page_background;
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

const AUDIO_ELEMENT_ID: &str = "birthday-audio";

const EMOJI_ROW: [&str; 5] = ["🎉", "🎂", "🎈", "🎁", "💝"];

/// Script that starts the audio element and reports whether it played.
fn play_script(volume: f64, looped: bool) -> String {
    format!(
        r#"
        const audio = document.getElementById('{AUDIO_ELEMENT_ID}');
        if (!audio) {{ return 'missing'; }}
        audio.volume = {volume};
        audio.loop = {looped};
        try {{
            await audio.play();
            return 'playing';
        }} catch (e) {{
            return 'blocked';
        }}
        "#
    )
}

fn pause_script() -> String {
    format!("document.getElementById('{AUDIO_ELEMENT_ID}')?.pause();")
}

/// Birthday card
///
/// Music starts on mount; if the webview refuses, the music control falls
/// back to paused and waits for a click.
#[component]
pub fn BirthdayCard() -> Element {
    let greeting = use_greeting();
    let controls: Signal<CardControls> = use_signal(CardControls::new);
    let mut viewport: Signal<Viewport> = use_signal(|| Viewport::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    let pieces = use_memo(move || {
        let settings = greeting.read().confetti.clone();
        scatter(&settings, viewport(), &mut rand::rng())
    });

    // Drive the audio element from the playback state
    use_effect(move || {
        let playing = controls.read().playback().is_playing();
        let audio = greeting.peek().audio;
        let mut controls = controls;

        spawn(async move {
            if !playing {
                let _ = document::eval(&pause_script());
                return;
            }

            let outcome = match document::eval(&play_script(audio.volume, audio.looped))
                .join::<String>()
                .await
            {
                Ok(status) if status == "playing" => AutoplayOutcome::Started,
                Ok(status) => {
                    tracing::debug!(%status, "Audio did not start");
                    AutoplayOutcome::Blocked
                }
                Err(e) => {
                    tracing::warn!("Audio play script failed: {:?}", e);
                    AutoplayOutcome::Blocked
                }
            };

            // Started needs no state change; writing would re-run this effect
            if outcome == AutoplayOutcome::Blocked {
                controls.write().record_autoplay(outcome);
            }
        });
    });

    let config = greeting.read();
    let title = config.card_title();
    let confetti_visible = controls.read().confetti_visible();
    let recycle = config.confetti.recycle;
    let background = page_background(config.assets.card_background.as_deref());

    rsx! {
        div {
            class: "card-page",
            style: "{background}",
            onresize: move |e: Event<ResizeData>| {
                if let Ok(size) = e.get_border_box_size() {
                    viewport.set(Viewport::new(size.width, size.height));
                }
            },

            if let Some(gif) = &config.assets.card_background {
                div { class: "gif-overlay", style: "background-image: url('{gif}');" }
            }

            if confetti_visible {
                ConfettiOverlay { pieces: pieces(), recycle }
            }

            CardControlsBar { controls }

            audio {
                id: AUDIO_ELEMENT_ID,
                src: "{config.assets.audio}",
                preload: "auto",
                style: "display: none;",
            }

            PhotoFrame {
                photo: config.assets.left_photo.clone(),
                alt: "Birthday photo".to_string(),
                side: "left",
            }
            PhotoFrame {
                photo: config.assets.right_photo.clone(),
                alt: "Balloon photo".to_string(),
                side: "right",
            }

            div { class: "birthday-card",
                div { class: "birthday-card__corner top-left spin", "🌸" }
                div { class: "birthday-card__corner top-right spin-reverse", "🌹" }
                div { class: "birthday-card__corner bottom-left sway", "🌺" }
                div { class: "birthday-card__corner bottom-right sway", "🌼" }

                h1 { class: "birthday-card__title", "{title}" }

                div { class: "cake",
                    div { class: "cake__candles",
                        for i in 0..3 {
                            div { key: "{i}", class: "cake__candle",
                                div { class: "cake__flame" }
                            }
                        }
                    }
                    div { class: "cake__tier top" }
                    div { class: "cake__tier bottom" }
                    div { class: "cake__plate" }
                }

                div { class: "birthday-card__message",
                    for (i, paragraph) in config.card.paragraphs.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }

                div { class: "birthday-card__emoji-row",
                    for (emoji, delay) in EMOJI_ROW.iter().zip((0u8..).map(|i| f64::from(i) * 0.2)) {
                        span { key: "{emoji}", class: "bounce", style: "animation-delay: {delay:.1}s;", "{emoji}" }
                    }
                }
            }
        }
    }
}
