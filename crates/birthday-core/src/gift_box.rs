//! Gift-box opening sequence.
//!
//! A click starts a fixed timeline: the lid starts to lift, confetti bursts
//! out, the lid settles open, and finally the reveal callback runs. The
//! phases form a straight line so the callback can only be reached once;
//! [`GiftBox`] also keeps an explicit fired flag around the callback.

use std::time::Duration;

use rand::Rng;

/// Where the box is in its opening sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GiftBoxPhase {
    /// Waiting for a click
    #[default]
    Closed,
    /// Lid lifting
    Opening,
    /// Lid lifting, confetti bursting
    Celebrating,
    /// Lid fully open
    Opened,
    /// Reveal callback has run
    Revealed,
}

/// Inputs to the opening sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftBoxEvent {
    Click,
    ConfettiDue,
    LidSettled,
    RevealDue,
}

/// What the view should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GiftBoxEffect {
    StartLidAnimation,
    ShowConfetti,
    SettleLid,
    InvokeReveal,
}

/// Result of feeding one event to a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub phase: GiftBoxPhase,
    pub effect: Option<GiftBoxEffect>,
}

impl GiftBoxPhase {
    /// Pure transition function. Events that do not apply leave the phase
    /// unchanged with no effect.
    pub fn next(self, event: GiftBoxEvent) -> Transition {
        use GiftBoxEffect::*;
        use GiftBoxEvent::*;
        use GiftBoxPhase::*;

        let (phase, effect) = match (self, event) {
            (Closed, Click) => (Opening, Some(StartLidAnimation)),
            (Opening, ConfettiDue) => (Celebrating, Some(ShowConfetti)),
            (Celebrating, LidSettled) => (Opened, Some(SettleLid)),
            (Opened, RevealDue) => (Revealed, Some(InvokeReveal)),
            (phase, _) => (phase, None),
        };
        Transition { phase, effect }
    }

    /// Whether the lid is wiggling to invite a click.
    pub fn is_inviting(self) -> bool {
        self == GiftBoxPhase::Closed
    }

    /// Whether the lid is mid-lift.
    pub fn is_lifting(self) -> bool {
        matches!(self, GiftBoxPhase::Opening | GiftBoxPhase::Celebrating)
    }

    /// Whether the lid rests in the open position.
    pub fn is_open(self) -> bool {
        matches!(self, GiftBoxPhase::Opened | GiftBoxPhase::Revealed)
    }

    /// Whether burst confetti should be on screen.
    pub fn shows_confetti(self) -> bool {
        matches!(
            self,
            GiftBoxPhase::Celebrating | GiftBoxPhase::Opened | GiftBoxPhase::Revealed
        )
    }
}

/// Gift box with an "already fired" guard on the reveal callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GiftBox {
    phase: GiftBoxPhase,
    reveal_fired: bool,
}

impl GiftBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GiftBoxPhase {
        self.phase
    }

    /// Whether the reveal callback has been handed out.
    pub fn reveal_fired(&self) -> bool {
        self.reveal_fired
    }

    /// Feed an event; returns the effect to perform, if any.
    pub fn handle(&mut self, event: GiftBoxEvent) -> Option<GiftBoxEffect> {
        let transition = self.phase.next(event);
        self.phase = transition.phase;

        match transition.effect {
            Some(GiftBoxEffect::InvokeReveal) if self.reveal_fired => None,
            Some(GiftBoxEffect::InvokeReveal) => {
                self.reveal_fired = true;
                Some(GiftBoxEffect::InvokeReveal)
            }
            None => {
                if event == GiftBoxEvent::Click {
                    tracing::debug!(phase = ?self.phase, "Gift box already opening, click ignored");
                }
                None
            }
            effect => effect,
        }
    }
}

/// Delays after the click at which each later event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GiftBoxTimeline {
    pub confetti_after: Duration,
    pub lid_settled_after: Duration,
    pub reveal_after: Duration,
}

impl Default for GiftBoxTimeline {
    fn default() -> Self {
        Self {
            confetti_after: Duration::from_millis(300),
            lid_settled_after: Duration::from_millis(1000),
            reveal_after: Duration::from_millis(2500),
        }
    }
}

impl GiftBoxTimeline {
    /// Every event fires right after the click.
    pub fn immediate() -> Self {
        Self {
            confetti_after: Duration::ZERO,
            lid_settled_after: Duration::ZERO,
            reveal_after: Duration::ZERO,
        }
    }

    /// Whether the delays are in firing order.
    pub fn is_ordered(&self) -> bool {
        self.confetti_after <= self.lid_settled_after && self.lid_settled_after <= self.reveal_after
    }

    /// Post-click events with their offsets from the click.
    pub fn schedule(&self) -> [(Duration, GiftBoxEvent); 3] {
        [
            (self.confetti_after, GiftBoxEvent::ConfettiDue),
            (self.lid_settled_after, GiftBoxEvent::LidSettled),
            (self.reveal_after, GiftBoxEvent::RevealDue),
        ]
    }
}

/// Sleep through `timeline`, passing each event to `sink` when it is due.
///
/// Offsets are measured from the call, which should happen right after the
/// click was accepted.
pub async fn play_timeline<F>(timeline: GiftBoxTimeline, mut sink: F)
where
    F: FnMut(GiftBoxEvent),
{
    let started = tokio::time::Instant::now();
    for (offset, event) in timeline.schedule() {
        tokio::time::sleep_until(started + offset).await;
        sink(event);
    }
}

/// One burst confetti glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstPiece {
    pub glyph: &'static str,
    /// Start position, percent of the box area
    pub left_pct: f64,
    pub top_pct: f64,
    /// Horizontal drift in px
    pub drift_px: f64,
    /// Start delay in seconds
    pub delay_s: f64,
}

const BURST_GLYPHS: [&str; 4] = ["🎉", "✨", "🎊", "💫"];

/// Number of glyphs in a burst.
pub const BURST_PIECES: usize = 20;

/// Scatter the burst glyphs around the centre of the box.
pub fn burst<R: Rng>(rng: &mut R) -> Vec<BurstPiece> {
    (0..BURST_PIECES)
        .map(|i| BurstPiece {
            glyph: BURST_GLYPHS[i % BURST_GLYPHS.len()],
            left_pct: 50.0 + rng.random_range(-10.0..10.0),
            top_pct: 50.0 + rng.random_range(-10.0..10.0),
            drift_px: rng.random_range(-100.0..100.0),
            delay_s: i as f64 * 0.1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_sequence() {
        let mut gift = GiftBox::new();
        assert_eq!(gift.handle(GiftBoxEvent::Click), Some(GiftBoxEffect::StartLidAnimation));
        assert_eq!(gift.handle(GiftBoxEvent::ConfettiDue), Some(GiftBoxEffect::ShowConfetti));
        assert_eq!(gift.handle(GiftBoxEvent::LidSettled), Some(GiftBoxEffect::SettleLid));
        assert_eq!(gift.handle(GiftBoxEvent::RevealDue), Some(GiftBoxEffect::InvokeReveal));
        assert_eq!(gift.phase(), GiftBoxPhase::Revealed);
        assert!(gift.reveal_fired());
    }

    #[test]
    fn test_clicks_while_opening_are_ignored() {
        let mut gift = GiftBox::new();
        gift.handle(GiftBoxEvent::Click);
        assert_eq!(gift.handle(GiftBoxEvent::Click), None);
        assert_eq!(gift.handle(GiftBoxEvent::Click), None);
        assert_eq!(gift.phase(), GiftBoxPhase::Opening);
    }

    #[test]
    fn test_out_of_order_event_is_noop() {
        let transition = GiftBoxPhase::Closed.next(GiftBoxEvent::RevealDue);
        assert_eq!(transition.phase, GiftBoxPhase::Closed);
        assert_eq!(transition.effect, None);
    }

    #[test]
    fn test_revealed_is_terminal() {
        for event in [
            GiftBoxEvent::Click,
            GiftBoxEvent::ConfettiDue,
            GiftBoxEvent::LidSettled,
            GiftBoxEvent::RevealDue,
        ] {
            assert_eq!(GiftBoxPhase::Revealed.next(event).effect, None);
        }
    }

    #[test]
    fn test_default_timeline_ordered() {
        assert!(GiftBoxTimeline::default().is_ordered());
        assert!(GiftBoxTimeline::immediate().is_ordered());
        let backwards = GiftBoxTimeline {
            confetti_after: Duration::from_millis(900),
            lid_settled_after: Duration::from_millis(100),
            reveal_after: Duration::from_millis(1000),
        };
        assert!(!backwards.is_ordered());
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_timeline_fires_in_order_on_time() {
        let start = tokio::time::Instant::now();
        let mut fired = Vec::new();
        play_timeline(GiftBoxTimeline::default(), |event| {
            fired.push((event, start.elapsed()));
        })
        .await;

        assert_eq!(
            fired,
            vec![
                (GiftBoxEvent::ConfettiDue, Duration::from_millis(300)),
                (GiftBoxEvent::LidSettled, Duration::from_millis(1000)),
                (GiftBoxEvent::RevealDue, Duration::from_millis(2500)),
            ]
        );
    }

    #[test]
    fn test_burst_cycles_glyphs() {
        let mut rng = StdRng::seed_from_u64(7);
        let pieces = burst(&mut rng);
        assert_eq!(pieces.len(), BURST_PIECES);
        assert_eq!(pieces[0].glyph, "🎉");
        assert_eq!(pieces[5].glyph, "✨");
        assert!(pieces.iter().all(|p| (40.0..=60.0).contains(&p.left_pct)));
        assert!((pieces[19].delay_s - 1.9).abs() < 1e-9);
    }
}
