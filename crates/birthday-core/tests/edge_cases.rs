//! Edge case and boundary condition tests
//!
//! Config files on disk, targets far in the past or future, and viewport
//! sizes the confetti overlay has to cope with.

use std::io::Write;

use birthday_core::confetti::{scatter, ConfettiSettings, Viewport};
use birthday_core::{
    CountdownTicker, CountdownTracker, GreetingConfig, GreetingError, ManualClock, RevealStyle,
    TimeLeft, TICK_PERIOD,
};
use chrono::{TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

// ============================================================================
// Config Files
// ============================================================================

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
recipient = "Grace"
target = "2031-03-09T08:30:00-05:00"
reveal = "waiting-screen"

[card]
title = "Many happy returns"
paragraphs = ["One line is enough."]

[assets]
audio = "media/song.ogg"
left_photo = "media/us.jpg"
"#
    )
    .unwrap();

    let config = GreetingConfig::load(file.path()).unwrap();
    assert_eq!(config.recipient, "Grace");
    assert_eq!(config.reveal, RevealStyle::WaitingScreen);
    assert_eq!(config.card_title(), "Many happy returns");
    assert_eq!(config.card.paragraphs.len(), 1);
    assert_eq!(config.assets.audio, "media/song.ogg");
    assert_eq!(config.assets.right_photo.as_deref(), Some("assets/stitch-ballon.png"));
    assert_eq!(config.target.offset().local_minus_utc(), -5 * 3600);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GreetingConfig::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, GreetingError::Io(_)));
}

#[test]
fn test_unknown_reveal_style_rejected() {
    let err = GreetingConfig::from_toml_str("reveal = \"fireworks\"\n").unwrap_err();
    assert!(matches!(err, GreetingError::ConfigParse(_)));
}

#[test]
fn test_blank_recipient_rejected() {
    let err = GreetingConfig::from_toml_str("recipient = \"   \"\n").unwrap_err();
    assert!(matches!(err, GreetingError::InvalidConfig(_)));
}

#[test]
fn test_empty_palette_rejected() {
    let err = GreetingConfig::from_toml_str("[confetti]\ncolors = []\n").unwrap_err();
    assert!(matches!(err, GreetingError::InvalidConfig(_)));
}

// ============================================================================
// Target Boundaries
// ============================================================================

/// A target years in the past completes on the very first reading.
#[tokio::test(start_paused = true)]
async fn test_long_past_target() {
    let target = GreetingConfig::default().target;
    let clock = ManualClock::new(target.with_timezone(&Utc) + TimeDelta::days(400));
    let mut ticker = CountdownTicker::spawn(CountdownTracker::new(&target), clock, TICK_PERIOD);

    let tick = ticker.next_reading().await.unwrap();
    assert!(tick.completed_now);
    assert_eq!(tick.remaining, TimeLeft::from_seconds(0));
    assert!(ticker.next_reading().await.is_none());
    assert!(ticker.is_finished());
}

/// Exactly at the target is already zero.
#[test]
fn test_exactly_at_target() {
    let target = GreetingConfig::default().target;
    let mut tracker = CountdownTracker::new(&target);
    let tick = tracker.tick(target.with_timezone(&Utc));
    assert!(tick.completed_now);
}

/// Days beyond 99 still split cleanly; the clock only shows the day remainder.
#[test]
fn test_far_future_reading() {
    let left = TimeLeft::from_seconds(400 * 86_400 + 59);
    assert_eq!(left.days, 400);
    assert_eq!(left.clock(), "00:00:59");
    assert_eq!(left.to_string(), "400d 00:00:59");
}

// ============================================================================
// Confetti Viewports
// ============================================================================

#[test]
fn test_zero_width_viewport() {
    let mut rng = StdRng::seed_from_u64(9);
    let pieces = scatter(&ConfettiSettings::default(), Viewport::new(0.0, 900.0), &mut rng);
    assert!(pieces.is_empty());
}

#[test]
fn test_taller_viewport_falls_longer() {
    let settings = ConfettiSettings::default();
    let short = scatter(&settings, Viewport::new(800.0, 400.0), &mut StdRng::seed_from_u64(5));
    let tall = scatter(&settings, Viewport::new(800.0, 1600.0), &mut StdRng::seed_from_u64(5));

    let mean = |pieces: &[birthday_core::ConfettiPiece]| {
        pieces.iter().map(|p| p.fall_s).sum::<f64>() / pieces.len() as f64
    };
    assert!(mean(&tall) > mean(&short));
}
