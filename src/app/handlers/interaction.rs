//! Handler für Bearbeitungsmodus, Werkzeug und Hover.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CurveId;
use glam::Vec2;

pub fn set_editing_enabled(state: &mut AppState, enabled: bool) {
    use_cases::interaction::set_editing_enabled(state, enabled);
}

pub fn set_tool(state: &mut AppState, tool: EditorTool) {
    use_cases::interaction::set_tool(state, tool);
}

pub fn set_active_curve(state: &mut AppState, curve: CurveId) {
    use_cases::interaction::set_active_curve(state, curve);
}

/// Aktualisiert den Hover-Punkt.
pub fn update_hover(state: &mut AppState, surface_px: Vec2, max_distance: f32) {
    use_cases::picking::update_hover(state, surface_px, max_distance);
}

pub fn clear_hover(state: &mut AppState) {
    use_cases::picking::clear_hover(state);
}
