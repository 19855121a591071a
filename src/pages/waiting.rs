//! Waiting screen: a dedicated page with the animated gift box.

use dioxus::prelude::*;

use crate::components::AnimatedGiftBox;
use crate::context::use_greeting;

/// Waiting screen shown between the countdown and the card
///
/// The card appears once the gift box's opening sequence reaches its reveal.
#[component]
pub fn WaitingScreen(on_gift_open: EventHandler<()>) -> Element {
    let greeting = use_greeting();
    let config = greeting.read();
    let timeline = config.gift_box.timeline();

    rsx! {
        div { class: "waiting-screen",
            div { class: "waiting-screen__content",
                div { class: "waiting-screen__heading",
                    h1 { class: "waiting-screen__title", "{config.waiting.title}" }
                    p { class: "waiting-screen__subtitle", "{config.waiting.subtitle}" }
                }

                div { class: "waiting-screen__gift",
                    div { class: "waiting-screen__glow" }
                    div { class: "waiting-screen__float",
                        AnimatedGiftBox {
                            top: config.assets.gift_box_top.clone(),
                            bottom: config.assets.gift_box_bottom.clone(),
                            timeline,
                            on_open: on_gift_open,
                        }
                    }
                }

                div { class: "waiting-screen__footer",
                    p { "{config.waiting.footer}" }
                    p { class: "waiting-screen__cta", "{config.waiting.call_to_action}" }
                }
            }
        }
    }
}
