//! Context providers for the birthday greeting.
//!
//! The root component provides the resolved greeting config; pages and
//! components read it through the hook below.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let greeting = use_greeting();
//! let title = greeting.read().card_title();
//! ```

use birthday_core::GreetingConfig;
use dioxus::prelude::*;

/// Get the greeting config resolved at startup.
pub fn get_greeting() -> GreetingConfig {
    crate::get_greeting()
}

/// Hook to access the greeting config from context.
pub fn use_greeting() -> Signal<GreetingConfig> {
    use_context::<Signal<GreetingConfig>>()
}
