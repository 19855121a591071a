//! Gift Box Components
//!
//! Two presentations of the same click-once box:
//!
//! | Component | Used by | Timeline |
//! |-----------|---------|----------|
//! | `StaticGiftBox` | countdown page (inline reveal) | immediate |
//! | `AnimatedGiftBox` | waiting screen | lid lift, confetti burst, delayed reveal |
//!
//! Both run clicks through `birthday_core::GiftBox`, so extra clicks while
//! the box is opening never reach `on_open`.

use birthday_core::gift_box::burst;
use birthday_core::{
    play_timeline, BurstPiece, GiftBox, GiftBoxEffect, GiftBoxEvent, GiftBoxPhase, GiftBoxTimeline,
};
use dioxus::prelude::*;

use crate::components::AssetImage;

/// Feed a click to `gift` and, if accepted, play `timeline` in a scoped task.
///
/// `on_open` runs when the timeline reaches the reveal, at most once.
fn open_gift(mut gift: Signal<GiftBox>, timeline: GiftBoxTimeline, on_open: EventHandler<()>) {
    if gift.write().handle(GiftBoxEvent::Click).is_none() {
        return;
    }
    tracing::info!("Gift box clicked, opening");

    spawn(async move {
        play_timeline(timeline, |event| {
            if gift.write().handle(event) == Some(GiftBoxEffect::InvokeReveal) {
                on_open.call(());
            }
        })
        .await;
    });
}

/// CSS classes for the lid in `phase`.
fn lid_class(phase: GiftBoxPhase) -> &'static str {
    if phase.is_open() {
        "gift-lid lid-rotated"
    } else if phase.is_lifting() {
        "gift-lid lid-rotating"
    } else {
        "gift-lid lid-wiggle"
    }
}

/// Static gift box for the countdown page
///
/// Clickable only while `enabled`; then a click opens the card right away.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     StaticGiftBox {
///         top: "assets/gift-box-top.svg".to_string(),
///         bottom: "assets/gift-box-bottom.svg".to_string(),
///         enabled: timer_ended,
///         on_open: move |_| page.write().apply(PageEvent::GiftOpened),
///     }
/// }
/// ```
#[component]
pub fn StaticGiftBox(
    /// Lid image
    top: String,
    /// Box image
    bottom: String,
    /// Accept clicks (timer has ended)
    #[props(default = false)]
    enabled: bool,
    /// Larger, shaking box after the countdown
    #[props(default = false)]
    large: bool,
    /// Called once when the box opens
    on_open: EventHandler<()>,
) -> Element {
    let gift = use_signal(GiftBox::new);

    let size_class = if large { "static-gift large" } else { "static-gift" };
    let shake_class = if large { "shaking" } else { "" };
    let cursor_class = if enabled { "clickable" } else { "" };

    let handle_click = move |_| {
        if enabled {
            open_gift(gift, GiftBoxTimeline::immediate(), on_open);
        }
    };

    rsx! {
        div {
            class: "{size_class} {shake_class} {cursor_class}",
            onclick: handle_click,

            AssetImage {
                src: bottom,
                alt: "Gift Box Bottom".to_string(),
                fallback: "🎁".to_string(),
                class: Some("static-gift__bottom".to_string()),
            }
            AssetImage {
                src: top,
                alt: "Gift Box Top".to_string(),
                fallback: "🎀".to_string(),
                class: Some("static-gift__top".to_string()),
            }
        }
    }
}

/// Animated gift box for the waiting screen
///
/// The lid wiggles until clicked, then lifts, bursts confetti and settles
/// open; `on_open` runs when the timeline's reveal delay has passed.
#[component]
pub fn AnimatedGiftBox(
    /// Lid image
    top: String,
    /// Box image
    bottom: String,
    /// Delays for the opening sequence
    timeline: GiftBoxTimeline,
    /// Called once when the box opens
    on_open: EventHandler<()>,
) -> Element {
    let gift = use_signal(GiftBox::new);
    let pieces: Vec<BurstPiece> = use_hook(|| burst(&mut rand::rng()));

    let phase = gift.read().phase();

    let handle_click = move |_| {
        open_gift(gift, timeline, on_open);
    };

    rsx! {
        div { class: "animated-gift",
            if phase.shows_confetti() {
                div { class: "gift-burst",
                    for (i, piece) in pieces.iter().enumerate() {
                        span {
                            key: "{i}",
                            class: "gift-burst__piece",
                            style: "left: {piece.left_pct}%; top: {piece.top_pct}%; --drift: {piece.drift_px}px; animation-delay: {piece.delay_s}s;",
                            "{piece.glyph}"
                        }
                    }
                }
            }

            div { class: "animated-gift__box",
                button {
                    class: "animated-gift__button",
                    onclick: handle_click,
                    AssetImage {
                        src: bottom,
                        alt: "Gift Box".to_string(),
                        fallback: "🎁".to_string(),
                        class: Some("animated-gift__bottom".to_string()),
                    }
                }
                AssetImage {
                    src: top,
                    alt: "Gift Box Lid".to_string(),
                    fallback: "🎀".to_string(),
                    class: Some(lid_class(phase).to_string()),
                }
            }

            if phase.is_inviting() {
                div { class: "animated-gift__hint", "Click to open! 🎁" }
            }
        }
    }
}
