//! Use-Case-Funktionen für Bearbeitungsmodus, Werkzeug und aktive Kurve.

use super::camera;
use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::core::CurveId;

/// Schaltet den Bearbeitungsmodus.
///
/// Jeder Wechsel setzt Zoom und Ursprung zurück und beendet laufende Gesten.
pub fn set_editing_enabled(state: &mut AppState, enabled: bool) {
    state.interaction.editing_enabled = enabled;
    state.interaction.clear_gesture();
    camera::reset_view(state);
    log::info!(
        "Bearbeitungsmodus {}",
        if enabled { "aktiviert" } else { "deaktiviert" }
    );
}

/// Wechselt das Werkzeug. Eine laufende Drag-Geste wird beendet.
pub fn set_tool(state: &mut AppState, tool: EditorTool) {
    state.interaction.tool = tool;
    state.interaction.drag = None;
    log::debug!("Werkzeug: {:?}", tool);
}

/// Wählt die Zielkurve für Einfügen und Zurücksetzen.
pub fn set_active_curve(state: &mut AppState, curve: CurveId) {
    state.interaction.active_curve = curve;
}
