//! Zeichenfläche: Pixelgröße und Layout-Größe der Bounding-Box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Abmessungen der Zeichenfläche.
///
/// `size` ist die interne Pixelauflösung, `client_size` die Größe der
/// Bounding-Box, in der Pointer-Events geliefert werden.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Surface {
    pub size: Vec2,
    pub client_size: Vec2,
}

impl Surface {
    /// Fläche, bei der Pixel- und Layout-Größe übereinstimmen.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            client_size: size,
        }
    }

    /// Fläche mit abweichender Layout-Größe (z.B. Device-Pixel-Ratio).
    pub fn with_client_size(size: Vec2, client_size: Vec2) -> Self {
        Self { size, client_size }
    }

    /// Kürzere Seite in Flächenpixeln.
    pub fn min_side(&self) -> f32 {
        self.size.x.min(self.size.y).max(0.0)
    }

    /// Ob die Fläche eine Ausdehnung hat.
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Skalierung Layout-Pixel → Flächenpixel je Achse.
    fn client_scale(&self) -> Vec2 {
        let axis = |px: f32, client: f32| {
            if client > 0.0 && px > 0.0 {
                px / client
            } else {
                1.0
            }
        };
        Vec2::new(
            axis(self.size.x, self.client_size.x),
            axis(self.size.y, self.client_size.y),
        )
    }

    /// Rohe Pointer-Position (Layout-Pixel) → gezoomtes Bildschirmpixel in Flächenauflösung.
    pub fn raw_to_screen(&self, raw: Vec2) -> Vec2 {
        raw * self.client_scale()
    }

    /// Bildschirmpixel → auf die Fläche normalisierte Position, geklemmt auf `[0, 1]`.
    pub fn normalize(&self, screen_px: Vec2) -> Vec2 {
        (screen_px / self.size.max(Vec2::ONE)).clamp(Vec2::ZERO, Vec2::ONE)
    }
}
