//! Handler für Vorhersage, Interpretation und Sitzungs-Reset.

use crate::app::state::PredictionSource;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PredictionResult;

/// Übernimmt eine Vorhersage atomar.
pub fn apply_prediction(state: &mut AppState, result: PredictionResult, source: PredictionSource) {
    use_cases::prediction::apply_prediction(state, result, source);
}

/// Meldet einen Vorhersage-Fehler.
pub fn report_prediction_failure(state: &mut AppState, message: String, time_ms: f64) {
    use_cases::prediction::report_failure(state, message, time_ms);
}

/// Verwirft den geladenen Satz.
pub fn clear(state: &mut AppState) {
    use_cases::prediction::clear_session(state);
}

/// Speichert eine Interpretations-Antwort.
pub fn set_interpretation(state: &mut AppState, result: serde_json::Value) {
    use_cases::interpretation::set_result(state, result);
}

/// Meldet einen Interpretations-Fehler.
pub fn report_interpretation_failure(state: &mut AppState, message: String) {
    use_cases::interpretation::report_failure(state, message);
}
