//! Use-Case-Funktionen für den Interpretations-Service.

use crate::app::state::StatusMessage;
use crate::app::AppState;
use crate::core::InterpretationRequest;

/// Baut die Anfrage aus dem aktuellen, ggf. bearbeiteten Kurvensatz.
///
/// `None`, solange kein Kurvensatz geladen ist.
pub fn build_request(state: &AppState) -> Option<InterpretationRequest> {
    let curves = state.curves.as_deref()?;
    Some(InterpretationRequest::new(
        curves,
        state.confidences,
        state.active_roi(),
    ))
}

/// Speichert die Antwort des Service zur Anzeige.
pub fn set_result(state: &mut AppState, result: serde_json::Value) {
    state.ui.interpretation = Some(result);
    log::info!("Interpretation empfangen");
}

/// Meldet einen Fehlschlag; eine frühere Interpretation bleibt sichtbar.
pub fn report_failure(state: &mut AppState, message: String) {
    log::warn!("Interpretation fehlgeschlagen: {}", message);
    state.ui.set_status(StatusMessage::error(message));
}
