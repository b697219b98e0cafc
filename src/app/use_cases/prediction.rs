//! Use-Case-Funktionen für Laden, Fehlschlag und Verwerfen einer Vorhersage.

use crate::app::state::{PredictionSource, StatusMessage, UiState};
use crate::app::AppState;
use crate::core::{PredictionResult, Roi};
use std::sync::Arc;

const BACKEND_OK_MESSAGE: &str = "Modellerkennung erfolgreich, Linien werden überlagert.";
const DEMO_OK_MESSAGE: &str = "Demo-Linien erzeugt (kein Modell-Service verbunden).";
const LOW_RESOLUTION_MESSAGE: &str = "Auflösung gering, die Erkennung kann ungenau sein.";

/// Übernimmt eine Vorhersage als Ganzes.
///
/// Kurven, Keypoints, ROI und Konfidenzen werden in einem Schritt ersetzt,
/// `original_lines` neu festgehalten, History und laufende Geste verworfen.
/// Kurven mit weniger als zwei Punkten werden unverändert übernommen.
pub fn apply_prediction(state: &mut AppState, result: PredictionResult, source: PredictionSource) {
    let PredictionResult {
        lines,
        confidences,
        keypoints,
        roi,
        warnings,
        time_ms,
        base_image,
        ..
    } = result;

    let curves = lines.map(Arc::new);
    state.original_lines = curves.clone();
    state.curves = curves;
    state.keypoints = keypoints.filter(|k| !k.is_empty()).map(Arc::new);
    state.roi = roi.filter(Roi::is_valid);
    state.confidences = confidences;

    state.history.clear();
    state.interaction.clear_gesture();
    state.view.base_image_pending = base_image.is_some();

    state.ui.time_ms = time_ms;
    state.ui.source = Some(source);
    state.ui.interpretation = None;
    state.ui.warnings = warnings;
    let surface = state.view.surface;
    if !state.view.base_image_pending
        && surface.has_area()
        && surface.min_side() < state.options.low_resolution_min_side_px
    {
        state.ui.warnings.push(LOW_RESOLUTION_MESSAGE.to_string());
    }
    refresh_status(&mut state.ui, source);

    log::info!(
        "Vorhersage übernommen ({:?}): {} Punkte, {} Warnungen, {:.0} ms",
        source,
        state.point_count(),
        state.ui.warnings.len(),
        time_ms
    );
}

/// Statuszeile: Warnungen oder eine Erfolgsmeldung je nach Herkunft.
fn refresh_status(ui: &mut UiState, source: PredictionSource) {
    ui.status.clear();
    if ui.warnings.is_empty() {
        let text = match source {
            PredictionSource::Backend => BACKEND_OK_MESSAGE,
            PredictionSource::Demo => DEMO_OK_MESSAGE,
        };
        ui.status.push(StatusMessage::info(text));
    } else {
        ui.status
            .extend(ui.warnings.iter().map(|w| StatusMessage::warning(w.as_str())));
    }
}

/// Meldet einen Fehlschlag des Modell-Service. Der geladene Kurvensatz bleibt erhalten.
pub fn report_failure(state: &mut AppState, message: String, time_ms: f64) {
    log::warn!("Vorhersage fehlgeschlagen: {}", message);
    state.ui.time_ms = time_ms;
    state.ui.source = Some(PredictionSource::Backend);
    state.ui.warnings = vec![message.clone()];
    state.ui.set_status(StatusMessage::error(message));
}

/// Verwirft alles Geladene. View-Einstellungen und Werkzeugwahl bleiben bestehen.
pub fn clear_session(state: &mut AppState) {
    state.curves = None;
    state.original_lines = None;
    state.keypoints = None;
    state.roi = None;
    state.confidences = None;
    state.history.clear();
    state.interaction.clear_gesture();
    state.view.base_image_pending = false;
    state.ui = UiState::new();
    log::info!("Sitzung zurückgesetzt");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StatusKind;
    use crate::core::{CurveId, CurveSet, PointRef, Surface, DEFAULT_ROI};
    use glam::Vec2;

    fn backend_result() -> PredictionResult {
        PredictionResult {
            lines: Some(CurveSet::demo()),
            roi: Some(Roi::new(0.2, 0.2, 0.6, 0.6)),
            time_ms: 120.0,
            ..Default::default()
        }
    }

    #[test]
    fn apply_replaces_set_and_clears_history_and_drag() {
        let mut state = AppState::new();
        state.curves = Some(Arc::new(CurveSet::default()));
        state.record_undo_snapshot();
        state.interaction.editing_enabled = true;
        state.interaction.drag = Some(PointRef {
            curve: CurveId::Head,
            index: 4,
        });

        apply_prediction(&mut state, backend_result(), PredictionSource::Backend);

        assert_eq!(state.point_count(), 60);
        assert!(!state.can_undo());
        assert!(state.interaction.drag.is_none());
        assert_eq!(state.original_lines, state.curves);
        assert_eq!(state.active_roi(), Roi::new(0.2, 0.2, 0.6, 0.6));
        assert_eq!(state.ui.status[0].kind, StatusKind::Info);
    }

    #[test]
    fn missing_or_degenerate_roi_falls_back_to_default() {
        let mut state = AppState::new();
        let mut result = backend_result();
        result.roi = Some(Roi::new(0.0, 0.0, 0.0, 0.0));
        apply_prediction(&mut state, result, PredictionSource::Backend);
        assert!(state.roi.is_none());
        assert_eq!(state.active_roi(), DEFAULT_ROI);
    }

    #[test]
    fn base_image_marks_overlay_pending() {
        let mut state = AppState::new();
        let mut result = backend_result();
        result.base_image = Some("data:image/png;base64,AAAA".to_string());
        apply_prediction(&mut state, result, PredictionSource::Backend);
        assert!(state.view.base_image_pending);
    }

    #[test]
    fn warnings_become_status_messages() {
        let mut state = AppState::new();
        let mut result = backend_result();
        result.warnings = vec!["Hand unscharf".to_string()];
        apply_prediction(&mut state, result, PredictionSource::Backend);
        assert_eq!(state.ui.status.len(), 1);
        assert_eq!(state.ui.status[0].kind, StatusKind::Warning);
    }

    #[test]
    fn small_surface_adds_resolution_warning() {
        let mut state = AppState::new();
        state.view.surface = Surface::new(Vec2::new(640.0, 480.0));
        apply_prediction(&mut state, PredictionResult::demo(), PredictionSource::Demo);
        assert_eq!(state.ui.warnings, vec![LOW_RESOLUTION_MESSAGE.to_string()]);
    }

    #[test]
    fn failure_keeps_loaded_curves() {
        let mut state = AppState::new();
        apply_prediction(&mut state, backend_result(), PredictionSource::Backend);
        report_failure(&mut state, "Zeitüberschreitung".to_string(), 0.0);
        assert_eq!(state.point_count(), 60);
        assert_eq!(state.ui.status[0].kind, StatusKind::Error);
    }

    #[test]
    fn clear_session_drops_everything_loaded() {
        let mut state = AppState::new();
        apply_prediction(&mut state, backend_result(), PredictionSource::Backend);
        state.record_undo_snapshot();
        clear_session(&mut state);
        assert!(state.curves.is_none());
        assert!(state.original_lines.is_none());
        assert!(!state.can_undo());
        assert!(state.ui.status.is_empty());
    }
}
