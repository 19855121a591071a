//! Countdown arithmetic.
//!
//! Remaining time is whole seconds until the target instant, floored at
//! zero. [`CountdownTracker`] adds the two guarantees the page relies on:
//! a reading never goes up, and completion is reported on exactly one tick.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Whole seconds from `now` until `target`, or 0 once `target` has passed.
pub fn seconds_until<Tz1: TimeZone, Tz2: TimeZone>(
    target: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
) -> u64 {
    let millis = target.timestamp_millis() - now.timestamp_millis();
    if millis <= 0 {
        0
    } else {
        (millis / 1000) as u64
    }
}

/// Remaining duration broken into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    /// Total remaining seconds
    pub total_seconds: u64,
    pub days: u64,
    /// Hours within the current day (0..24)
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Split a number of seconds into days/hours/minutes/seconds.
    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            days: total_seconds / SECS_PER_DAY,
            hours: (total_seconds % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total_seconds % SECS_PER_MINUTE,
        }
    }

    /// Whether the countdown has reached zero.
    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }

    /// `HH:MM:SS`, hours taken within the day.
    pub fn clock(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }

    /// Labelled two-digit tiles for hours, minutes and seconds.
    pub fn tiles(&self) -> [(&'static str, [char; 2]); 3] {
        [
            ("HOURS", two_digits(self.hours)),
            ("MINUTES", two_digits(self.minutes)),
            ("SECONDS", two_digits(self.seconds)),
        ]
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}d {}", self.days, self.clock())
        } else {
            f.write_str(&self.clock())
        }
    }
}

/// The two display digits of a value below 100.
pub fn two_digits(value: u64) -> [char; 2] {
    let value = value % 100;
    let tens = char::from(b'0' + (value / 10) as u8);
    let ones = char::from(b'0' + (value % 10) as u8);
    [tens, ones]
}

/// One countdown sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Reading to display
    pub remaining: TimeLeft,
    /// True on the single tick where the countdown reached zero
    pub completed_now: bool,
}

/// Countdown toward a fixed target instant.
#[derive(Debug, Clone)]
pub struct CountdownTracker {
    target: DateTime<Utc>,
    last_seconds: Option<u64>,
    completed: bool,
}

impl CountdownTracker {
    /// Create a tracker for `target`.
    pub fn new<Tz: TimeZone>(target: &DateTime<Tz>) -> Self {
        Self {
            target: target.with_timezone(&Utc),
            last_seconds: None,
            completed: false,
        }
    }

    /// The target instant in UTC.
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Whether completion has already been reported.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Sample the countdown at `now`.
    ///
    /// A wall clock stepping backwards cannot raise the reading above the
    /// previous one.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        let fresh = seconds_until(&self.target, &now);
        let seconds = match self.last_seconds {
            Some(previous) => fresh.min(previous),
            None => fresh,
        };
        self.last_seconds = Some(seconds);

        let completed_now = seconds == 0 && !self.completed;
        if completed_now {
            self.completed = true;
            tracing::info!(target_instant = %self.target, "Countdown reached zero");
        }

        Tick {
            remaining: TimeLeft::from_seconds(seconds),
            completed_now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta};

    fn target() -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339("2025-07-18T00:00:00+08:00").unwrap()
    }

    #[test]
    fn test_seconds_until_floors_partial_seconds() {
        let now = target() - TimeDelta::milliseconds(1999);
        assert_eq!(seconds_until(&target(), &now), 1);
    }

    #[test]
    fn test_seconds_until_zero_after_target() {
        let now = target() + TimeDelta::days(3);
        assert_eq!(seconds_until(&target(), &now), 0);
    }

    #[test]
    fn test_time_left_split() {
        let left = TimeLeft::from_seconds(2 * 86_400 + 3 * 3600 + 4 * 60 + 5);
        assert_eq!(left.days, 2);
        assert_eq!(left.hours, 3);
        assert_eq!(left.minutes, 4);
        assert_eq!(left.seconds, 5);
        assert_eq!(left.clock(), "03:04:05");
        assert_eq!(left.to_string(), "2d 03:04:05");
    }

    #[test]
    fn test_tiles() {
        let left = TimeLeft::from_seconds(10 * 3600 + 7);
        let tiles = left.tiles();
        assert_eq!(tiles[0], ("HOURS", ['1', '0']));
        assert_eq!(tiles[1], ("MINUTES", ['0', '0']));
        assert_eq!(tiles[2], ("SECONDS", ['0', '7']));
    }

    #[test]
    fn test_past_target_completes_on_first_tick() {
        let mut tracker = CountdownTracker::new(&target());
        let tick = tracker.tick(target().with_timezone(&Utc) + TimeDelta::hours(1));
        assert!(tick.remaining.is_zero());
        assert!(tick.completed_now);

        let again = tracker.tick(target().with_timezone(&Utc) + TimeDelta::hours(2));
        assert!(!again.completed_now);
        assert!(tracker.is_completed());
    }

    #[test]
    fn test_backwards_clock_does_not_raise_reading() {
        let mut tracker = CountdownTracker::new(&target());
        let utc_target = target().with_timezone(&Utc);

        assert_eq!(tracker.tick(utc_target - TimeDelta::seconds(10)).remaining.total_seconds, 10);
        assert_eq!(tracker.tick(utc_target - TimeDelta::seconds(60)).remaining.total_seconds, 10);
        assert_eq!(tracker.tick(utc_target - TimeDelta::seconds(9)).remaining.total_seconds, 9);
    }
}
