//! Scoped one-second ticker driving the countdown.
//!
//! The ticker task belongs to its [`CountdownTicker`] handle: dropping the
//! handle aborts the task, so a view that owns the handle stops ticking as
//! soon as it is torn down.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::clock::Clock;
use crate::countdown::{CountdownTracker, Tick};

/// Default tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle to a running countdown ticker.
pub struct CountdownTicker {
    readings: watch::Receiver<Tick>,
    initial_taken: bool,
    task: JoinHandle<()>,
}

impl CountdownTicker {
    /// Start ticking.
    ///
    /// The first reading is taken synchronously, so a target already in the
    /// past completes without waiting a period. Afterwards the task samples
    /// `clock` once per `period` and stops on its own after completion.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<C: Clock>(mut tracker: CountdownTracker, clock: C, period: Duration) -> Self {
        let first = tracker.tick(clock.now());
        let (tx, readings) = watch::channel(first);

        let task = tokio::spawn(async move {
            if first.completed_now {
                return;
            }

            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first interval tick fires immediately; that sample was taken above.
            interval.tick().await;

            loop {
                interval.tick().await;
                let tick = tracker.tick(clock.now());
                tracing::debug!(remaining = %tick.remaining, "Countdown tick");

                if tx.send(tick).is_err() {
                    // Nobody is listening any more
                    break;
                }
                if tick.completed_now {
                    break;
                }
            }
        });

        Self {
            readings,
            initial_taken: false,
            task,
        }
    }

    /// Wait for the next reading.
    ///
    /// Returns `None` once the ticker has stopped and its final reading has
    /// been handed out. The completing tick is always the last reading.
    pub async fn next_reading(&mut self) -> Option<Tick> {
        if !self.initial_taken {
            self.initial_taken = true;
            return Some(*self.readings.borrow_and_update());
        }

        match self.readings.changed().await {
            Ok(()) => Some(*self.readings.borrow_and_update()),
            Err(_) => None,
        }
    }

    /// Whether the ticker task has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{DateTime, TimeDelta, Utc};

    fn target() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-07-18T00:00:00+08:00")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_down_to_completion() {
        let clock = ManualClock::new(target() - TimeDelta::seconds(3));
        let mut ticker =
            CountdownTicker::spawn(CountdownTracker::new(&target()), clock.clone(), TICK_PERIOD);

        let mut seen = Vec::new();
        let mut completions = 0;
        while let Some(tick) = ticker.next_reading().await {
            seen.push(tick.remaining.total_seconds);
            if tick.completed_now {
                completions += 1;
            }
            clock.advance(TimeDelta::seconds(1));
        }

        assert_eq!(seen, vec![3, 2, 1, 0]);
        assert_eq!(completions, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_past_target_finishes_immediately() {
        let clock = ManualClock::new(target() + TimeDelta::minutes(5));
        let mut ticker =
            CountdownTicker::spawn(CountdownTracker::new(&target()), clock, TICK_PERIOD);

        let first = ticker.next_reading().await.unwrap();
        assert!(first.remaining.is_zero());
        assert!(first.completed_now);
        assert!(ticker.next_reading().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_the_task() {
        let clock = ManualClock::new(target() - TimeDelta::hours(1));
        let ticker = CountdownTicker::spawn(CountdownTracker::new(&target()), clock, TICK_PERIOD);
        let task_probe = ticker.readings.clone();

        drop(ticker);
        tokio::time::sleep(Duration::from_secs(5)).await;

        // Sender went away with the aborted task
        assert!(task_probe.has_changed().is_err());
    }
}
