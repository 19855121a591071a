//! Countdown page: ticking timer over a closed gift box.
//!
//! With the inline reveal this page stays mounted after zero; the timer
//! blinks, the peek image appears and the gift box becomes clickable.

use birthday_core::{
    seconds_until, CountdownTicker, CountdownTracker, SystemClock, TimeLeft, TICK_PERIOD,
};
use chrono::Utc;
use dioxus::prelude::*;

use crate::components::{AssetImage, CountdownDisplay, StaticGiftBox};
use crate::context::use_greeting;
use crate::theme::page_background;

/// Countdown page
///
/// `on_complete` runs once, when the ticker reports the countdown reached
/// zero (immediately on mount if the target has already passed).
#[component]
pub fn CountdownPage(
    /// Countdown is over and the gift box accepts clicks
    timer_ended: bool,
    on_complete: EventHandler<()>,
    on_gift_open: EventHandler<()>,
) -> Element {
    let greeting = use_greeting();
    let mut reading: Signal<TimeLeft> =
        use_signal(|| TimeLeft::from_seconds(seconds_until(&greeting.peek().target, &Utc::now())));

    // Ticker lives inside the future; unmounting drops it and stops the task
    use_future(move || async move {
        let tracker = CountdownTracker::new(&greeting.peek().target);
        let mut ticker = CountdownTicker::spawn(tracker, SystemClock, TICK_PERIOD);

        while let Some(tick) = ticker.next_reading().await {
            reading.set(tick.remaining);
            if tick.completed_now {
                on_complete.call(());
            }
        }
    });

    let config = greeting.read();
    let background = page_background(config.assets.countdown_background.as_deref());
    let layout_class = if timer_ended {
        "countdown-page ended"
    } else {
        "countdown-page"
    };

    rsx! {
        div { class: "{layout_class}", style: "{background}",
            if let Some(gif) = &config.assets.countdown_background {
                div { class: "gif-overlay", style: "background-image: url('{gif}');" }
            }

            div { class: "countdown-page__content",
                if !timer_ended {
                    h1 { class: "countdown-page__title", "{config.countdown.title}" }
                }

                CountdownDisplay { time_left: reading(), blinking: timer_ended }

                div { class: "countdown-page__stage",
                    if timer_ended {
                        AssetImage {
                            src: config.assets.peek.clone(),
                            alt: "Peeking friend".to_string(),
                            fallback: "👀".to_string(),
                            class: Some("countdown-page__peek".to_string()),
                        }
                    }

                    StaticGiftBox {
                        top: config.assets.gift_box_top.clone(),
                        bottom: config.assets.gift_box_bottom.clone(),
                        enabled: timer_ended,
                        large: timer_ended,
                        on_open: on_gift_open,
                    }
                }

                if timer_ended {
                    p { class: "countdown-page__prompt", "{config.countdown.prompt}" }
                }
            }
        }
    }
}
