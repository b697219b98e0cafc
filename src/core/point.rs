//! Normalisierte Punkte im ROI-lokalen Kurvenraum.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Punkt einer Kurve, beide Koordinaten in `[0, 1]` relativ zur ROI.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    /// Erstellt einen Punkt ohne Clamping.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Erstellt einen Punkt und klemmt beide Achsen auf `[0, 1]`.
    ///
    /// Nicht-endliche Werte landen auf 0.
    pub fn clamped(x: f32, y: f32) -> Self {
        Self {
            x: clamp_unit(x),
            y: clamp_unit(y),
        }
    }

    /// Gibt den Punkt als `Vec2` zurück.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Liegen beide Koordinaten in `[0, 1]`?
    pub fn is_in_unit_square(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

impl From<Vec2> for NormalizedPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<NormalizedPoint> for Vec2 {
    fn from(p: NormalizedPoint) -> Self {
        p.to_vec2()
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
