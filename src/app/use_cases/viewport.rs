//! Use-Case-Funktionen für Zeichenfläche und Sichtbarkeit.

use crate::app::AppState;
use crate::core::{CurveId, Surface};
use glam::Vec2;

/// Aktualisiert Pixel- und Layout-Größe der Zeichenfläche.
pub fn resize(state: &mut AppState, size: Vec2, client_size: Vec2) {
    state.view.surface = Surface::with_client_size(size.max(Vec2::ZERO), client_size);
    log::debug!(
        "Zeichenfläche: {}x{} px (Layout {}x{})",
        size.x,
        size.y,
        client_size.x,
        client_size.y
    );
}

/// Blendet eine Kurve ein oder aus. Ein Hover auf einer ausgeblendeten Kurve wird verworfen.
pub fn set_curve_visibility(state: &mut AppState, curve: CurveId, visible: bool) {
    state.view.toggles.set_curve_visible(curve, visible);
    if !visible && state.interaction.hover.is_some_and(|h| h.curve == curve) {
        state.interaction.hover = None;
    }
}

/// Blendet die Keypoints ein oder aus.
pub fn set_keypoints_visibility(state: &mut AppState, visible: bool) {
    state.view.toggles.keypoints = visible;
}

/// Ersatz-Basisbild ist gezeichnet, Overlay darf wieder gerendert werden.
pub fn mark_base_image_ready(state: &mut AppState) {
    state.view.base_image_pending = false;
}
