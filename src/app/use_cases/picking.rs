//! Use-Case-Funktionen für Punkt-Picking und Hover.

use crate::app::AppState;
use crate::core::{nearest_point, PointHit};
use glam::Vec2;

/// Sucht den nächstgelegenen Punkt aller sichtbaren Kurven.
///
/// `None`, wenn kein Kurvensatz geladen ist oder kein Punkt innerhalb
/// `max_distance` (Flächenpixel) liegt.
pub fn pick_point(state: &AppState, surface_px: Vec2, max_distance: f32) -> Option<PointHit> {
    let curves = state.curves.as_deref()?;
    let toggles = state.view.toggles;
    nearest_point(
        curves,
        &state.active_roi(),
        state.view.surface.size,
        surface_px,
        max_distance,
        |id| toggles.is_curve_visible(id),
    )
}

/// Aktualisiert den Punkt unter dem Pointer.
pub fn update_hover(state: &mut AppState, surface_px: Vec2, max_distance: f32) {
    state.interaction.hover = pick_point(state, surface_px, max_distance).map(|hit| hit.point);
}

/// Vergisst den Hover-Punkt (Pointer hat die Fläche verlassen).
pub fn clear_hover(state: &mut AppState) {
    state.interaction.hover = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Curve, CurveId, CurveSet, NormalizedPoint, PointRef, Roi, Surface};
    use std::sync::Arc;

    fn state_with_heart() -> AppState {
        let mut state = AppState::new();
        state.view.surface = Surface::new(Vec2::new(100.0, 100.0));
        state.roi = Some(Roi::FULL);
        state.curves = Some(Arc::new(CurveSet {
            heart: Curve::new(vec![
                NormalizedPoint::new(0.2, 0.2),
                NormalizedPoint::new(0.8, 0.8),
            ]),
            ..Default::default()
        }));
        state
    }

    #[test]
    fn hover_tracks_nearest_visible_point() {
        let mut state = state_with_heart();
        update_hover(&mut state, Vec2::new(79.0, 81.0), 5.0);
        assert_eq!(
            state.interaction.hover,
            Some(PointRef {
                curve: CurveId::Heart,
                index: 1
            })
        );

        update_hover(&mut state, Vec2::new(50.0, 50.0), 5.0);
        assert!(state.interaction.hover.is_none());
    }

    #[test]
    fn hidden_curve_cannot_be_picked() {
        let mut state = state_with_heart();
        state.view.toggles.heart = false;
        assert!(pick_point(&state, Vec2::new(20.0, 20.0), 5.0).is_none());
    }

    #[test]
    fn no_curves_no_hit() {
        let state = AppState::new();
        assert!(pick_point(&state, Vec2::ZERO, 100.0).is_none());
    }
}
