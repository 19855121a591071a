//! Page flow: countdown, then the gift-box reveal, then the card.
//!
//! ## States
//!
//! | State | Shown | Leaves on |
//! |-------|-------|-----------|
//! | Countdown | ticking timer, closed gift box | `TimerCompleted` |
//! | Waiting | gift box inviting a click | `GiftOpened` |
//! | Card | greeting card with music and confetti | never |
//!
//! Every transition moves forward and fires at most once.

use serde::{Deserialize, Serialize};

/// Coarse-grained view currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageState {
    #[default]
    Countdown,
    Waiting,
    Card,
}

/// Something that can move the page forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEvent {
    /// The countdown reached zero
    TimerCompleted,
    /// The gift box finished opening
    GiftOpened,
}

impl PageState {
    /// The state `event` leads to, or `None` if it does not apply here.
    pub fn on(self, event: PageEvent) -> Option<PageState> {
        match (self, event) {
            (PageState::Countdown, PageEvent::TimerCompleted) => Some(PageState::Waiting),
            (PageState::Waiting, PageEvent::GiftOpened) => Some(PageState::Card),
            _ => None,
        }
    }

    /// Position in the flow; later states rank higher.
    pub fn rank(self) -> u8 {
        match self {
            PageState::Countdown => 0,
            PageState::Waiting => 1,
            PageState::Card => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageState::Countdown => "countdown",
            PageState::Waiting => "waiting",
            PageState::Card => "card",
        }
    }
}

/// How the reveal between countdown and card is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealStyle {
    /// The countdown page stays up with a large shaking gift box
    #[default]
    Inline,
    /// A dedicated screen with an animated gift box
    WaitingScreen,
}

impl std::str::FromStr for RevealStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(RevealStyle::Inline),
            "waiting-screen" => Ok(RevealStyle::WaitingScreen),
            other => Err(format!("unknown reveal style '{}'", other)),
        }
    }
}

/// A transition that actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTransition {
    pub from: PageState,
    pub to: PageState,
    pub event: PageEvent,
}

/// Page state plus the history of how it got there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMachine {
    state: PageState,
    transitions: Vec<PageTransition>,
}

impl PageMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Every transition applied so far, oldest first.
    pub fn transitions(&self) -> &[PageTransition] {
        &self.transitions
    }

    /// Apply `event`; returns the new state if it moved.
    pub fn apply(&mut self, event: PageEvent) -> Option<PageState> {
        match self.state.on(event) {
            Some(next) => {
                tracing::info!(
                    from = self.state.label(),
                    to = next.label(),
                    ?event,
                    "Page transition"
                );
                self.transitions.push(PageTransition {
                    from: self.state,
                    to: next,
                    event,
                });
                self.state = next;
                Some(next)
            }
            None => {
                tracing::debug!(state = self.state.label(), ?event, "Ignoring page event");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_flow() {
        let mut machine = PageMachine::new();
        assert_eq!(machine.apply(PageEvent::TimerCompleted), Some(PageState::Waiting));
        assert_eq!(machine.apply(PageEvent::GiftOpened), Some(PageState::Card));
        assert_eq!(machine.transitions().len(), 2);
    }

    #[test]
    fn test_gift_click_before_timer_is_ignored() {
        let mut machine = PageMachine::new();
        assert_eq!(machine.apply(PageEvent::GiftOpened), None);
        assert_eq!(machine.state(), PageState::Countdown);
        assert!(machine.transitions().is_empty());
    }

    #[test]
    fn test_card_is_terminal() {
        for event in [PageEvent::TimerCompleted, PageEvent::GiftOpened] {
            assert_eq!(PageState::Card.on(event), None);
        }
    }

    #[test]
    fn test_reveal_style_parse() {
        assert_eq!("inline".parse::<RevealStyle>(), Ok(RevealStyle::Inline));
        assert_eq!("waiting-screen".parse::<RevealStyle>(), Ok(RevealStyle::WaitingScreen));
        assert!("sideways".parse::<RevealStyle>().is_err());
    }
}
