//! Birthday Greeting Core Library
//!
//! The logic behind the birthday greeting page, kept free of any UI code.
//!
//! ## Overview
//!
//! The page counts down to a target instant, reveals a gift box once the
//! countdown reaches zero, and opens a greeting card when the box is
//! clicked. This crate owns the moving parts of that flow:
//!
//! - **Countdown**: whole seconds to the target, never increasing, with a
//!   single completion signal ([`CountdownTracker`], [`CountdownTicker`])
//! - **Page flow**: one-way `Countdown → Waiting → Card` ([`PageMachine`])
//! - **Gift box**: click-once opening sequence ([`GiftBox`], [`GiftBoxTimeline`])
//! - **Card**: music and confetti toggles ([`CardControls`], [`confetti`])
//! - **Config**: personalization loaded from TOML ([`GreetingConfig`])
//!
//! ## Quick Start
//!
//! ```ignore
//! use birthday_core::{CountdownTicker, CountdownTracker, GreetingConfig, SystemClock, TICK_PERIOD};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GreetingConfig::default();
//!     let tracker = CountdownTracker::new(&config.target);
//!     let mut ticker = CountdownTicker::spawn(tracker, SystemClock, TICK_PERIOD);
//!
//!     while let Some(tick) = ticker.next_reading().await {
//!         println!("{}", tick.remaining);
//!     }
//! }
//! ```

pub mod card;
pub mod clock;
pub mod confetti;
pub mod config;
pub mod countdown;
pub mod error;
pub mod gift_box;
pub mod page;
pub mod ticker;

// Re-exports
pub use card::{AudioSettings, AutoplayOutcome, CardControls, Playback};
pub use clock::{Clock, ManualClock, SystemClock};
pub use confetti::{ConfettiPiece, ConfettiSettings, Viewport};
pub use config::{parse_target, GreetingConfig};
pub use countdown::{seconds_until, CountdownTracker, Tick, TimeLeft};
pub use error::{GreetingError, GreetingResult};
pub use gift_box::{
    play_timeline, BurstPiece, GiftBox, GiftBoxEffect, GiftBoxEvent, GiftBoxPhase, GiftBoxTimeline,
};
pub use page::{PageEvent, PageMachine, PageState, PageTransition, RevealStyle};
pub use ticker::{CountdownTicker, TICK_PERIOD};
