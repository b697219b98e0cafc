//! Handler für Undo.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Laufende Geste und Hover werden verworfen, da ihre Indizes nach dem
/// Zurückspringen nicht mehr gelten müssen.
pub fn undo(state: &mut AppState) {
    if let Some(prev) = state.history.pop_undo() {
        prev.apply_to(state);
        state.interaction.clear_gesture();
        log::info!("Undo ausgeführt ({} verbleibend)", state.history.len());
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}
