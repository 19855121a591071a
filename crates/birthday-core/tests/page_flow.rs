//! Page flow scenarios
//!
//! End-to-end walks through countdown, reveal and card using the same
//! pieces the desktop app wires together.

use std::cell::RefCell;
use std::time::Duration;

use birthday_core::{
    play_timeline, CardControls, CountdownTicker, CountdownTracker, GiftBox, GiftBoxEffect,
    GiftBoxEvent, GiftBoxPhase, GiftBoxTimeline, GreetingConfig, ManualClock, PageEvent,
    PageMachine, PageState, TICK_PERIOD,
};
use chrono::{DateTime, TimeDelta, Utc};

// ============================================================================
// Test Utilities
// ============================================================================

fn birthday() -> DateTime<Utc> {
    GreetingConfig::default().target.with_timezone(&Utc)
}

/// Click the box, then keep clicking every 100 ms while its timeline plays.
///
/// Returns how many times the reveal callback ran and the phase each extra
/// click landed in.
async fn open_with_clicks(
    gift: &RefCell<GiftBox>,
    machine: &RefCell<PageMachine>,
    clicks: usize,
) -> (usize, Vec<GiftBoxPhase>) {
    let reveals = RefCell::new(0);
    let mut landed = Vec::new();

    assert_eq!(
        gift.borrow_mut().handle(GiftBoxEvent::Click),
        Some(GiftBoxEffect::StartLidAnimation)
    );

    let timeline = play_timeline(GiftBoxTimeline::default(), |event| {
        if gift.borrow_mut().handle(event) == Some(GiftBoxEffect::InvokeReveal) {
            *reveals.borrow_mut() += 1;
            machine.borrow_mut().apply(PageEvent::GiftOpened);
        }
    });
    let clicker = async {
        for _ in 1..clicks {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let mut gift = gift.borrow_mut();
            landed.push(gift.phase());
            assert_eq!(gift.handle(GiftBoxEvent::Click), None);
        }
    };
    tokio::join!(timeline, clicker);

    (reveals.into_inner(), landed)
}

// ============================================================================
// Countdown Scenarios
// ============================================================================

/// One second before the target reads 00:00:01; one second later reads
/// 00:00:00 and completion has fired exactly once.
#[tokio::test(start_paused = true)]
async fn test_last_second_of_countdown() {
    let clock = ManualClock::new(birthday() - TimeDelta::seconds(1));
    let mut ticker = CountdownTicker::spawn(
        CountdownTracker::new(&GreetingConfig::default().target),
        clock.clone(),
        TICK_PERIOD,
    );
    let mut machine = PageMachine::new();
    let mut completions = 0;

    let first = ticker.next_reading().await.unwrap();
    assert_eq!(first.remaining.clock(), "00:00:01");
    assert!(!first.completed_now);

    clock.advance(TimeDelta::seconds(1));
    let second = ticker.next_reading().await.unwrap();
    assert_eq!(second.remaining.clock(), "00:00:00");
    if second.completed_now {
        completions += 1;
        machine.apply(PageEvent::TimerCompleted);
    }

    clock.advance(TimeDelta::seconds(1));
    assert!(ticker.next_reading().await.is_none());

    assert_eq!(completions, 1);
    assert_eq!(machine.state(), PageState::Waiting);
}

#[tokio::test(start_paused = true)]
async fn test_ticker_samples_once_per_second() {
    let clock = ManualClock::new(birthday() - TimeDelta::seconds(5));
    let mut ticker =
        CountdownTicker::spawn(CountdownTracker::new(&birthday()), clock.clone(), TICK_PERIOD);

    let start = tokio::time::Instant::now();
    ticker.next_reading().await.unwrap();
    clock.advance(TimeDelta::seconds(1));
    ticker.next_reading().await.unwrap();
    clock.advance(TimeDelta::seconds(1));
    ticker.next_reading().await.unwrap();

    assert_eq!(start.elapsed(), Duration::from_secs(2));
}

// ============================================================================
// Reveal Scenarios
// ============================================================================

/// Three rapid clicks during the reveal open the card exactly once.
#[tokio::test(start_paused = true)]
async fn test_triple_click_reveals_once() {
    let machine = RefCell::new(PageMachine::new());
    machine.borrow_mut().apply(PageEvent::TimerCompleted);
    let gift = RefCell::new(GiftBox::new());

    let (reveals, landed) = open_with_clicks(&gift, &machine, 3).await;

    assert_eq!(reveals, 1);
    assert_eq!(landed, vec![GiftBoxPhase::Opening, GiftBoxPhase::Opening]);
    assert_eq!(machine.borrow().state(), PageState::Card);
    assert_eq!(machine.borrow().transitions().len(), 2);
}

/// Clicks arriving while the lid is still moving are dropped.
#[tokio::test(start_paused = true)]
async fn test_clicks_during_timeline_are_dropped() {
    let gift = RefCell::new(GiftBox::new());
    let reveals = RefCell::new(0);

    assert!(gift.borrow_mut().handle(GiftBoxEvent::Click).is_some());

    let timeline = play_timeline(GiftBoxTimeline::default(), |event| {
        if gift.borrow_mut().handle(event) == Some(GiftBoxEffect::InvokeReveal) {
            *reveals.borrow_mut() += 1;
        }
    });
    let clicker = async {
        for _ in 0..3 {
            tokio::time::sleep(Duration::from_millis(200)).await;
            assert_eq!(gift.borrow_mut().handle(GiftBoxEvent::Click), None);
        }
    };
    tokio::join!(timeline, clicker);

    assert_eq!(*reveals.borrow(), 1);
}

/// A gift click before the countdown ends does not skip ahead.
#[test]
fn test_gift_click_during_countdown_ignored() {
    let mut machine = PageMachine::new();
    assert_eq!(machine.apply(PageEvent::GiftOpened), None);
    assert_eq!(machine.apply(PageEvent::TimerCompleted), Some(PageState::Waiting));
    assert_eq!(machine.apply(PageEvent::TimerCompleted), None);
    assert_eq!(machine.apply(PageEvent::GiftOpened), Some(PageState::Card));
    assert_eq!(machine.apply(PageEvent::GiftOpened), None);
}

// ============================================================================
// Card Scenarios
// ============================================================================

/// Toggling the music twice returns to the original state.
#[test]
fn test_music_toggle_round_trip() {
    let mut controls = CardControls::new();
    let before = controls.playback();
    controls.toggle_music();
    controls.toggle_music();
    assert_eq!(controls.playback(), before);
    assert!(controls.confetti_visible());
}
