//! Card view controls: background music and the confetti overlay.
//!
//! Both are independent on/off switches with no bearing on the page flow.

use serde::{Deserialize, Serialize};

/// Music playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    /// Playing, or trying to start playing
    #[default]
    Playing,
    Paused,
}

impl Playback {
    pub fn toggled(self) -> Self {
        match self {
            Playback::Playing => Playback::Paused,
            Playback::Paused => Playback::Playing,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Playback::Playing
    }
}

/// Result of asking the audio element to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayOutcome {
    Started,
    /// The page refused to start audio without a user gesture
    Blocked,
}

/// Audio element settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// 0.0 to 1.0
    pub volume: f64,
    pub looped: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 0.5,
            looped: true,
        }
    }
}

/// The card's two toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardControls {
    playback: Playback,
    confetti_visible: bool,
}

impl Default for CardControls {
    fn default() -> Self {
        Self {
            playback: Playback::Playing,
            confetti_visible: true,
        }
    }
}

impl CardControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn confetti_visible(&self) -> bool {
        self.confetti_visible
    }

    pub fn toggle_music(&mut self) -> Playback {
        self.playback = self.playback.toggled();
        tracing::debug!(playback = ?self.playback, "Music toggled");
        self.playback
    }

    pub fn toggle_confetti(&mut self) -> bool {
        self.confetti_visible = !self.confetti_visible;
        tracing::debug!(visible = self.confetti_visible, "Confetti toggled");
        self.confetti_visible
    }

    /// Record how an autoplay attempt went.
    ///
    /// A blocked attempt leaves the music paused and is never retried; the
    /// next explicit toggle starts it.
    pub fn record_autoplay(&mut self, outcome: AutoplayOutcome) {
        match outcome {
            AutoplayOutcome::Started => {}
            AutoplayOutcome::Blocked => {
                tracing::debug!("Autoplay blocked, user interaction required");
                self.playback = Playback::Paused;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_music_toggle_twice_restores_state() {
        let mut controls = CardControls::new();
        let original = controls.playback();
        controls.toggle_music();
        assert_ne!(controls.playback(), original);
        controls.toggle_music();
        assert_eq!(controls.playback(), original);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut controls = CardControls::new();
        controls.toggle_confetti();
        assert!(!controls.confetti_visible());
        assert!(controls.playback().is_playing());
    }

    #[test]
    fn test_blocked_autoplay_leaves_music_paused() {
        let mut controls = CardControls::new();
        controls.record_autoplay(AutoplayOutcome::Blocked);
        assert_eq!(controls.playback(), Playback::Paused);

        controls.toggle_music();
        assert!(controls.playback().is_playing());
    }
}
