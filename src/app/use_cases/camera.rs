//! Use-Case-Funktionen für Zoom und Transformations-Ursprung.

use crate::app::AppState;
use glam::Vec2;

/// Setzt Zoom und Ursprung auf Default zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.transform.reset();
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    zoom_by(state, state.options.zoom_step);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    zoom_by(state, 1.0 / state.options.zoom_step);
}

fn zoom_by(state: &mut AppState, factor: f32) {
    state
        .view
        .transform
        .zoom_by_clamped(factor, state.options.zoom_min, state.options.zoom_max);
    log::debug!("Zoom: {:.2}", state.view.transform.zoom);
}

/// Zoomt um `factor` und legt den Ursprung auf den Flächenpunkt unter dem Pointer.
pub fn zoom_at(state: &mut AppState, factor: f32, surface_px: Vec2) {
    let origin = state.view.surface.normalize(surface_px);
    state.view.transform.set_origin(origin);
    zoom_by(state, factor);
}
