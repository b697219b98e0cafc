//! Region of Interest: Abbildung zwischen Kurvenraum und Flächenraum.
//!
//! Kurvenpunkte sind relativ zur ROI normalisiert, die ROI selbst relativ
//! zur gesamten Zeichenfläche. Die Vorwärtsrichtung lautet
//! `surface = roi.origin + point * roi.size`.

use super::NormalizedPoint;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kleinste Breite/Höhe, unterhalb derer eine ROI als degeneriert gilt.
const MIN_ROI_EXTENT: f32 = 1e-6;

/// Normalisierte Teilfläche `{x, y, w, h}` der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Fallback-ROI, wenn die Vorhersage keine liefert.
pub const DEFAULT_ROI: Roi = Roi {
    x: 0.12,
    y: 0.12,
    w: 0.76,
    h: 0.76,
};

impl Default for Roi {
    fn default() -> Self {
        DEFAULT_ROI
    }
}

impl Roi {
    /// ROI über die gesamte Fläche.
    pub const FULL: Roi = Roi {
        x: 0.0,
        y: 0.0,
        w: 1.0,
        h: 1.0,
    };

    /// Erstellt eine ROI.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Ursprung als `Vec2`.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Ausdehnung als `Vec2`.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Prüft, ob durch Breite und Höhe sicher dividiert werden kann.
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.w, self.h]
            .iter()
            .all(|v| v.is_finite())
            && self.w > MIN_ROI_EXTENT
            && self.h > MIN_ROI_EXTENT
    }

    /// Gibt `roi` zurück, falls gültig, sonst `fallback`.
    pub fn resolve(roi: Option<Roi>, fallback: Roi) -> Roi {
        match roi {
            Some(r) if r.is_valid() => r,
            _ if fallback.is_valid() => fallback,
            _ => DEFAULT_ROI,
        }
    }

    /// Kurvenpunkt → flächennormalisierte Koordinate.
    pub fn to_surface(&self, point: NormalizedPoint) -> Vec2 {
        self.origin() + point.to_vec2() * self.size()
    }

    /// Flächennormalisierte Koordinate → Kurvenpunkt, geklemmt auf `[0, 1]`.
    pub fn from_surface(&self, surface: Vec2) -> NormalizedPoint {
        let local = (surface - self.origin()) / self.size();
        NormalizedPoint::clamped(local.x, local.y)
    }

    /// Kurvenpunkt → Flächenpixel.
    pub fn to_pixel(&self, point: NormalizedPoint, surface_size: Vec2) -> Vec2 {
        self.to_surface(point) * surface_size
    }

    /// Flächenpixel → Kurvenpunkt, geklemmt auf `[0, 1]`.
    ///
    /// Eine Fläche ohne Ausdehnung wird wie 1×1 Pixel behandelt.
    pub fn from_pixel(&self, pixel: Vec2, surface_size: Vec2) -> NormalizedPoint {
        self.from_surface(pixel / surface_size.max(Vec2::ONE))
    }

    /// ROI-Rechteck in Flächenpixeln als `(min, size)`.
    pub fn pixel_rect(&self, surface_size: Vec2) -> (Vec2, Vec2) {
        (self.origin() * surface_size, self.size() * surface_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forward_maps_into_roi_frame() {
        let roi = Roi::new(0.1, 0.2, 0.5, 0.4);
        let s = roi.to_surface(NormalizedPoint::new(0.5, 0.5));
        assert_relative_eq!(s.x, 0.35);
        assert_relative_eq!(s.y, 0.4);
    }

    #[test]
    fn pixel_round_trip_restores_point() {
        let size = Vec2::new(1080.0, 1440.0);
        let rois = [DEFAULT_ROI, Roi::FULL, Roi::new(0.3, 0.05, 0.2, 0.9)];
        for roi in rois {
            for &(x, y) in &[(0.0, 0.0), (1.0, 1.0), (0.25, 0.75), (0.613, 0.002)] {
                let p = NormalizedPoint::new(x, y);
                let back = roi.from_pixel(roi.to_pixel(p, size), size);
                assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
                assert_relative_eq!(back.y, p.y, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn pixels_outside_roi_are_clamped() {
        let size = Vec2::new(100.0, 100.0);
        let p = DEFAULT_ROI.from_pixel(Vec2::new(0.0, 100.0), size);
        assert_eq!(p, NormalizedPoint::new(0.0, 1.0));
    }

    #[test]
    fn resolve_falls_back_on_degenerate_roi() {
        let zero = Roi::new(0.1, 0.1, 0.0, 0.5);
        assert_eq!(Roi::resolve(Some(zero), DEFAULT_ROI), DEFAULT_ROI);
        assert_eq!(Roi::resolve(None, Roi::FULL), Roi::FULL);
        assert_eq!(Roi::resolve(None, zero), DEFAULT_ROI);
    }

    #[test]
    fn zero_sized_surface_does_not_produce_nan() {
        let p = Roi::FULL.from_pixel(Vec2::new(0.5, 0.5), Vec2::ZERO);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
