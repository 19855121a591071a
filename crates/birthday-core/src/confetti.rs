//! Full-screen confetti for the card view.
//!
//! Pieces are generated once per viewport size and animated by CSS. Fall
//! time follows from gravity in px/frame² at 60 frames per second, so a
//! taller window gives a longer fall.

use rand::Rng;
use serde::{Deserialize, Serialize};

const FRAMES_PER_SECOND: f64 = 60.0;

/// Extra distance so pieces start and end off screen.
const OFFSCREEN_MARGIN_PX: f64 = 40.0;

/// Overlay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiSettings {
    pub pieces: usize,
    /// Downward acceleration in px per frame²
    pub gravity: f64,
    /// Keep pieces falling forever instead of a single shower
    pub recycle: bool,
    pub colors: Vec<String>,
}

impl Default for ConfettiSettings {
    fn default() -> Self {
        Self {
            pieces: 150,
            gravity: 0.2,
            recycle: true,
            colors: [
                "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe", "#FFFFFF",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Size of the area confetti falls through, in CSS px.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether anything can be drawn at all.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// One confetti rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub left_px: f64,
    pub width_px: f64,
    pub height_px: f64,
    pub color: String,
    /// Seconds from top to bottom
    pub fall_s: f64,
    /// Seconds before the first fall starts
    pub delay_s: f64,
    /// Sideways drift over one fall
    pub drift_px: f64,
    /// Rotation over one fall
    pub spin_deg: f64,
}

/// Seconds for a piece to fall `distance_px` under `gravity` px/frame².
pub fn fall_seconds(distance_px: f64, gravity: f64) -> f64 {
    if distance_px <= 0.0 || gravity <= 0.0 {
        return 0.0;
    }
    (2.0 * distance_px / gravity).sqrt() / FRAMES_PER_SECOND
}

/// Generate the pieces for `viewport`.
///
/// An empty viewport or palette yields no pieces.
pub fn scatter<R: Rng>(
    settings: &ConfettiSettings,
    viewport: Viewport,
    rng: &mut R,
) -> Vec<ConfettiPiece> {
    if viewport.is_empty() || settings.colors.is_empty() {
        return Vec::new();
    }

    let distance = viewport.height + 2.0 * OFFSCREEN_MARGIN_PX;

    (0..settings.pieces)
        .map(|i| {
            // Air drag slows each piece by a different amount
            let drag = rng.random_range(0.35..1.0);
            let fall_s = fall_seconds(distance, settings.gravity * drag);
            let delay_s = if settings.recycle {
                rng.random_range(0.0..fall_s.max(f64::EPSILON))
            } else {
                0.0
            };

            ConfettiPiece {
                left_px: rng.random_range(0.0..viewport.width),
                width_px: rng.random_range(5.0..20.0),
                height_px: rng.random_range(10.0..30.0),
                color: settings.colors[i % settings.colors.len()].clone(),
                fall_s,
                delay_s,
                drift_px: rng.random_range(-60.0..60.0),
                spin_deg: rng.random_range(180.0..900.0),
            }
        })
        .collect()
}
