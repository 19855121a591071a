//! Greeting configuration.
//!
//! Everything personal about the greeting lives here: who it is for, when
//! the countdown ends, what the card says, and where the assets are. The
//! defaults reproduce the greeting as first shipped, so an empty file is a
//! valid config.
//!
//! ```toml
//! recipient = "Hui Mun"
//! target = 2025-07-18T00:00:00+08:00   # or quoted
//! reveal = "waiting-screen"
//!
//! [gift_box]
//! reveal_ms = 1500
//!
//! [audio]
//! volume = 0.3
//! ```

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::card::AudioSettings;
use crate::confetti::ConfettiSettings;
use crate::error::{GreetingError, GreetingResult};
use crate::gift_box::GiftBoxTimeline;
use crate::page::RevealStyle;

/// Default target: midnight starting 18 July 2025, Singapore time.
pub const DEFAULT_TARGET: &str = "2025-07-18T00:00:00+08:00";

/// Parse an RFC 3339 target instant such as `2025-07-18T00:00:00+08:00`.
pub fn parse_target(s: &str) -> GreetingResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map_err(|e| GreetingError::InvalidTarget(format!("'{}': {}", s, e)))
}

/// `target` as written in the file: a quoted string or a bare TOML
/// offset date-time.
#[derive(Deserialize)]
#[serde(untagged)]
enum TargetValue {
    Text(String),
    Datetime(toml::value::Datetime),
}

fn deserialize_target<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match TargetValue::deserialize(deserializer)? {
        TargetValue::Text(text) => text,
        TargetValue::Datetime(datetime) => datetime.to_string(),
    };
    parse_target(&text).map_err(serde::de::Error::custom)
}

/// Upper bound on confetti pieces; the field is regenerated on every resize.
pub const MAX_CONFETTI_PIECES: usize = 1000;

fn default_target() -> DateTime<FixedOffset> {
    // Constant input, checked by test_default_target
    DateTime::parse_from_rfc3339(DEFAULT_TARGET).unwrap_or_default()
}

/// Complete greeting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Name shown on the card
    pub recipient: String,
    /// When the countdown reaches zero (RFC 3339, quoted or bare)
    #[serde(deserialize_with = "deserialize_target")]
    pub target: DateTime<FixedOffset>,
    pub reveal: RevealStyle,
    pub countdown: CountdownText,
    pub waiting: WaitingText,
    pub card: CardText,
    pub assets: AssetPaths,
    pub gift_box: GiftBoxTimings,
    pub confetti: ConfettiSettings,
    pub audio: AudioSettings,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            recipient: "Hui Mun".to_string(),
            target: default_target(),
            reveal: RevealStyle::default(),
            countdown: CountdownText::default(),
            waiting: WaitingText::default(),
            card: CardText::default(),
            assets: AssetPaths::default(),
            gift_box: GiftBoxTimings::default(),
            confetti: ConfettiSettings::default(),
            audio: AudioSettings::default(),
        }
    }
}

/// Text on the countdown page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownText {
    pub title: String,
    /// Shown under the gift box once the timer ends (inline reveal)
    pub prompt: String,
}

impl Default for CountdownText {
    fn default() -> Self {
        Self {
            title: "Countdown to something special ✨".to_string(),
            prompt: "Open the box for a surprise".to_string(),
        }
    }
}

/// Text on the waiting screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitingText {
    pub title: String,
    pub subtitle: String,
    pub footer: String,
    pub call_to_action: String,
}

impl Default for WaitingText {
    fn default() -> Self {
        Self {
            title: "🎁 Your Special Gift Awaits! 🎁".to_string(),
            subtitle: "Click the magical gift box to reveal your surprise!".to_string(),
            footer: "✨ Something magical is waiting inside ✨".to_string(),
            call_to_action: "Tap to unwrap your surprise! 💝".to_string(),
        }
    }
}

/// Text on the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardText {
    /// Defaults to "HAPPY BIRTHDAY <RECIPIENT>!"
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

impl Default for CardText {
    fn default() -> Self {
        Self {
            title: None,
            paragraphs: vec![
                "Happy birthday to one of the brightest souls I know. 🎉 Today marks 23 years of \
                 your existence, and I just want to say how grateful I am that you're here, \
                 bringing light and joy into the lives of everyone around you."
                    .to_string(),
                "You've survived and thrived through every challenge, including the day when you \
                 drop your pen into that impossibly tiny gap and suddenly question your entire \
                 life's choices, always doing your best, and I admire you so deeply for that."
                    .to_string(),
                "May this year bring you the same kindness and happiness you give so effortlessly \
                 to others every day… and may you never drop your pen in that cursed gap again. ❤️"
                    .to_string(),
            ],
        }
    }
}

/// Asset locations, passed to the view untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub audio: String,
    pub gift_box_top: String,
    pub gift_box_bottom: String,
    /// Character peeking over the box once the timer ends
    pub peek: String,
    pub left_photo: Option<String>,
    pub right_photo: Option<String>,
    pub countdown_background: Option<String>,
    pub card_background: Option<String>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            audio: "assets/happy-birthday.mp3".to_string(),
            gift_box_top: "assets/gift-box-top.svg".to_string(),
            gift_box_bottom: "assets/gift-box-bottom.svg".to_string(),
            peek: "assets/stitch-peek.svg".to_string(),
            left_photo: Some("assets/stitch-hbday.png".to_string()),
            right_photo: Some("assets/stitch-ballon.png".to_string()),
            countdown_background: None,
            card_background: None,
        }
    }
}

/// Gift-box delays in milliseconds after the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftBoxTimings {
    pub confetti_ms: u64,
    pub lid_settled_ms: u64,
    pub reveal_ms: u64,
}

impl Default for GiftBoxTimings {
    fn default() -> Self {
        let timeline = GiftBoxTimeline::default();
        Self {
            confetti_ms: timeline.confetti_after.as_millis() as u64,
            lid_settled_ms: timeline.lid_settled_after.as_millis() as u64,
            reveal_ms: timeline.reveal_after.as_millis() as u64,
        }
    }
}

impl GiftBoxTimings {
    pub fn timeline(&self) -> GiftBoxTimeline {
        GiftBoxTimeline {
            confetti_after: Duration::from_millis(self.confetti_ms),
            lid_settled_after: Duration::from_millis(self.lid_settled_ms),
            reveal_after: Duration::from_millis(self.reveal_ms),
        }
    }
}

impl GreetingConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> GreetingResult<Self> {
        let config: GreetingConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> GreetingResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), recipient = %config.recipient, "Loaded greeting config");
        Ok(config)
    }

    /// Replace the target instant.
    pub fn with_target(mut self, target: DateTime<FixedOffset>) -> Self {
        self.target = target;
        self
    }

    /// Replace the reveal style.
    pub fn with_reveal(mut self, reveal: RevealStyle) -> Self {
        self.reveal = reveal;
        self
    }

    /// Card heading.
    pub fn card_title(&self) -> String {
        self.card
            .title
            .clone()
            .unwrap_or_else(|| format!("HAPPY BIRTHDAY {}!", self.recipient.to_uppercase()))
    }

    /// Check values the view cannot work with.
    pub fn validate(&self) -> GreetingResult<()> {
        if self.recipient.trim().is_empty() {
            return Err(GreetingError::InvalidConfig("recipient must not be empty".to_string()));
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            return Err(GreetingError::InvalidConfig(format!(
                "audio volume {} is outside 0.0..=1.0",
                self.audio.volume
            )));
        }
        if self.confetti.colors.is_empty() {
            return Err(GreetingError::InvalidConfig(
                "confetti needs at least one colour".to_string(),
            ));
        }
        if self.confetti.pieces > MAX_CONFETTI_PIECES {
            return Err(GreetingError::InvalidConfig(format!(
                "confetti pieces {} exceeds the limit of {}",
                self.confetti.pieces, MAX_CONFETTI_PIECES
            )));
        }
        if self.confetti.gravity.is_nan() || self.confetti.gravity <= 0.0 {
            return Err(GreetingError::InvalidConfig(format!(
                "confetti gravity {} must be positive",
                self.confetti.gravity
            )));
        }
        if !self.gift_box.timeline().is_ordered() {
            return Err(GreetingError::InvalidConfig(
                "gift box delays must satisfy confetti_ms <= lid_settled_ms <= reveal_ms"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
