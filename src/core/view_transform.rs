//! Zoom-Transformation der Zeichenfläche (Skalierung um einen Ursprung).
//!
//! Reine Darstellungs-Transformation: Kurven, ROI und Keypoints bleiben
//! davon unberührt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Skalierung der gerenderten Fläche um einen normalisierten Ursprung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Zoom-Faktor (1.0 = unskaliert)
    pub zoom: f32,
    /// Transformations-Ursprung, normalisiert auf die Fläche
    pub origin: Vec2,
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 1.0;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 3.0;
    /// Standard-Ursprung (Flächenmitte).
    pub const CENTER: Vec2 = Vec2::new(0.5, 0.5);

    /// Erstellt eine unskalierte Transformation mit zentriertem Ursprung.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            origin: Self::CENTER,
        }
    }

    /// Setzt Zoom und Ursprung zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Ändert den Zoom multiplikativ innerhalb `[min, max]`.
    ///
    /// Die Grenzen selbst werden vorher in `[ZOOM_MIN, ZOOM_MAX]` gezogen.
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        let lo = if min.is_finite() {
            min.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX)
        } else {
            Self::ZOOM_MIN
        };
        let hi = if max.is_finite() {
            max.clamp(lo, Self::ZOOM_MAX)
        } else {
            Self::ZOOM_MAX
        };
        let zoom = self.zoom * factor;
        if zoom.is_finite() {
            self.zoom = zoom.clamp(lo, hi);
        }
    }

    /// Setzt den Ursprung (geklemmt auf die Fläche).
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin.clamp(Vec2::ZERO, Vec2::ONE);
    }

    /// Ursprung in Flächenpixeln.
    fn origin_px(&self, surface_size: Vec2) -> Vec2 {
        self.origin * surface_size
    }

    /// Unskaliertes Flächenpixel → gezoomtes Bildschirmpixel.
    pub fn to_screen(&self, surface_px: Vec2, surface_size: Vec2) -> Vec2 {
        let o = self.origin_px(surface_size);
        o + (surface_px - o) * self.zoom
    }

    /// Gezoomtes Bildschirmpixel → unskaliertes Flächenpixel.
    ///
    /// Ursprungs-Offset abziehen, durch den Zoom teilen, Offset wieder addieren.
    pub fn to_surface(&self, screen_px: Vec2, surface_size: Vec2) -> Vec2 {
        let o = self.origin_px(surface_size);
        (screen_px - o) / self.zoom.max(f32::EPSILON) + o
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_at_zoom_one() {
        let view = ViewTransform::new();
        let size = Vec2::new(800.0, 600.0);
        let q = Vec2::new(123.0, 456.0);
        assert_eq!(view.to_surface(q, size), q);
        assert_eq!(view.to_screen(q, size), q);
    }

    #[test]
    fn origin_stays_fixed_under_zoom() {
        let mut view = ViewTransform::new();
        view.set_origin(Vec2::new(0.25, 0.75));
        view.zoom = 2.5;
        let size = Vec2::new(400.0, 400.0);
        let origin_px = Vec2::new(100.0, 300.0);
        let s = view.to_screen(origin_px, size);
        assert_relative_eq!(s.x, 100.0);
        assert_relative_eq!(s.y, 300.0);
    }

    #[test]
    fn inverse_is_consistent_over_zoom_range() {
        let size = Vec2::new(1080.0, 1920.0);
        for &zoom in &[1.0, 1.5, 2.0, 3.0] {
            for &origin in &[Vec2::ZERO, Vec2::ONE, Vec2::new(0.3, 0.8)] {
                let mut view = ViewTransform::new();
                view.zoom = zoom;
                view.set_origin(origin);
                for &q in &[Vec2::ZERO, Vec2::new(540.0, 960.0), Vec2::new(1079.0, 3.0)] {
                    let back = view.to_screen(view.to_surface(q, size), size);
                    assert_relative_eq!(back.x, q.x, epsilon = 1e-3);
                    assert_relative_eq!(back.y, q.y, epsilon = 1e-3);
                }
            }
        }
    }

    #[test]
    fn zoom_is_clamped_to_range() {
        let mut view = ViewTransform::new();
        view.zoom_by_clamped(10.0, 1.0, 3.0);
        assert_relative_eq!(view.zoom, 3.0);
        view.zoom_by_clamped(0.01, 1.0, 3.0);
        assert_relative_eq!(view.zoom, 1.0);
    }

    #[test]
    fn zoom_bounds_above_range_stay_within_range() {
        let mut view = ViewTransform::new();
        view.zoom_by_clamped(1.2, 5.0, 8.0);
        assert_relative_eq!(view.zoom, 3.0);

        view.zoom_by_clamped(1.2, 1.0, 0.5);
        assert_relative_eq!(view.zoom, 1.0);

        view.zoom_by_clamped(f32::NAN, 1.0, 3.0);
        assert_relative_eq!(view.zoom, 1.0);
    }

    #[test]
    fn reset_restores_center() {
        let mut view = ViewTransform::new();
        view.zoom = 2.0;
        view.set_origin(Vec2::new(0.1, 0.9));
        view.reset();
        assert_eq!(view, ViewTransform::new());
    }
}
