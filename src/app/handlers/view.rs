//! Handler für Zoom, Zeichenfläche und Sichtbarkeit.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveId;
use glam::Vec2;

/// Setzt Zoom und Ursprung zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Zoomt mit Ursprung unter dem Pointer.
pub fn zoom_at(state: &mut AppState, factor: f32, surface_px: Vec2) {
    use_cases::camera::zoom_at(state, factor, surface_px);
}

/// Aktualisiert die Flächengröße im State.
pub fn set_surface_size(state: &mut AppState, size: Vec2, client_size: Vec2) {
    use_cases::viewport::resize(state, size, client_size);
}

pub fn set_curve_visibility(state: &mut AppState, curve: CurveId, visible: bool) {
    use_cases::viewport::set_curve_visibility(state, curve, visible);
}

pub fn set_keypoints_visibility(state: &mut AppState, visible: bool) {
    use_cases::viewport::set_keypoints_visibility(state, visible);
}

/// Basisbild ist gezeichnet.
pub fn mark_base_image_ready(state: &mut AppState) {
    use_cases::viewport::mark_base_image_ready(state);
}
