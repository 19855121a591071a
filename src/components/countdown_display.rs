//! Countdown Display Component
//!
//! Digit tiles for the remaining time. Each unit is shown as two tiles, one
//! per digit; days get their own group only while any remain.

use birthday_core::TimeLeft;
use dioxus::prelude::*;

/// Countdown tiles
///
/// # Examples
///
/// ```rust
/// rsx! {
///     CountdownDisplay {
///         time_left: TimeLeft::from_seconds(3_725),
///         blinking: false,
///     }
/// }
/// ```
#[component]
pub fn CountdownDisplay(
    /// Reading to show
    time_left: TimeLeft,
    /// Slow blink once the countdown is over
    #[props(default = false)]
    blinking: bool,
) -> Element {
    let wrapper_class = if blinking {
        "countdown-display blinking"
    } else {
        "countdown-display"
    };

    rsx! {
        div {
            class: "{wrapper_class}",
            "aria-label": "Time remaining {time_left}",

            if time_left.days > 0 {
                div { class: "countdown-unit",
                    div { class: "countdown-unit__label", "DAYS" }
                    div { class: "countdown-unit__digits",
                        div { class: "digit-tile wide", "{time_left.days}" }
                    }
                }
            }

            for (label, [tens, ones]) in time_left.tiles() {
                div { key: "{label}", class: "countdown-unit",
                    div { class: "countdown-unit__label", "{label}" }
                    div { class: "countdown-unit__digits",
                        div { class: "digit-tile", "{tens}" }
                        div { class: "digit-tile", "{ones}" }
                    }
                }
            }
        }
    }
}
