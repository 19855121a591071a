use birthday_core::{GreetingConfig, PageEvent, PageMachine, PageState, RevealStyle};
use dioxus::prelude::*;

use crate::context::get_greeting;
use crate::pages::{BirthdayCard, CountdownPage, WaitingScreen};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the greeting config, owns the page machine,
/// and shows the page for the current state:
///
/// - `Countdown` - ticking timer over a closed gift box
/// - `Waiting` - gift box inviting a click (inline or on its own screen)
/// - `Card` - the birthday card
#[component]
pub fn App() -> Element {
    let greeting: Signal<GreetingConfig> = use_signal(get_greeting);
    let mut page: Signal<PageMachine> = use_signal(PageMachine::new);

    // Provide the greeting to all child components
    use_context_provider(|| greeting);

    let state = page.read().state();
    let reveal = greeting.read().reveal;

    let on_timer_complete = move |_: ()| {
        page.write().apply(PageEvent::TimerCompleted);
    };

    let on_gift_open = move |_: ()| {
        page.write().apply(PageEvent::GiftOpened);
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root",
            {match (state, reveal) {
                (PageState::Card, _) => rsx! {
                    BirthdayCard {}
                },
                (PageState::Waiting, RevealStyle::WaitingScreen) => rsx! {
                    WaitingScreen { on_gift_open }
                },
                _ => rsx! {
                    // The inline reveal keeps the countdown page mounted after zero
                    CountdownPage {
                        timer_ended: state == PageState::Waiting,
                        on_complete: on_timer_complete,
                        on_gift_open,
                    }
                },
            }}
        }
    }
}
