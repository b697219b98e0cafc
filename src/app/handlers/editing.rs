//! Handler für Kurven-Editing (Einfügen, Löschen, Ziehen, Zurücksetzen).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveId;
use glam::Vec2;

/// Fügt einen Punkt auf dem nächsten Segment ein.
pub fn insert_point(state: &mut AppState, curve: CurveId, surface_px: Vec2) {
    use_cases::editing::insert_point(state, curve, surface_px);
}

/// Entfernt den nächstgelegenen Punkt.
pub fn erase_point(state: &mut AppState, surface_px: Vec2, max_distance: f32) {
    use_cases::editing::erase_point_at(state, surface_px, max_distance);
}

/// Startet eine Drag-Geste.
pub fn begin_drag(state: &mut AppState, surface_px: Vec2, max_distance: f32) {
    use_cases::editing::begin_drag(state, surface_px, max_distance);
}

/// Aktualisiert die Drag-Geste.
pub fn drag_to(state: &mut AppState, surface_px: Vec2) {
    use_cases::editing::drag_to(state, surface_px);
}

/// Beendet die Drag-Geste.
pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Setzt eine Kurve auf den geladenen Stand zurück.
pub fn reset_curve(state: &mut AppState, curve: CurveId) {
    use_cases::editing::reset_curve(state, curve);
}
