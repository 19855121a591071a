//! Confetti Overlay Component
//!
//! Full-window layer of falling pieces. Positions come from
//! `birthday_core::confetti::scatter`; the fall itself is a CSS animation so
//! nothing here ticks.

use birthday_core::ConfettiPiece;
use dioxus::prelude::*;

/// Falling confetti over the card
///
/// With `recycle` each piece loops forever, otherwise it falls once and
/// stays hidden.
#[component]
pub fn ConfettiOverlay(pieces: Vec<ConfettiPiece>, #[props(default = true)] recycle: bool) -> Element {
    let iterations = if recycle { "infinite" } else { "1" };

    rsx! {
        div {
            class: "confetti-overlay",
            "aria-hidden": "true",

            for (i, piece) in pieces.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "confetti-piece",
                    style: "left: {piece.left_px:.1}px; width: {piece.width_px:.1}px; height: {piece.height_px:.1}px; background: {piece.color}; --drift: {piece.drift_px:.1}px; --spin: {piece.spin_deg:.0}deg; animation-duration: {piece.fall_s:.2}s; animation-delay: {piece.delay_s:.2}s; animation-iteration-count: {iterations};",
                }
            }
        }
    }
}
