use super::curves_mut;
use crate::app::AppState;
use crate::core::CurveId;

/// Setzt eine Kurve auf den Stand beim Laden der Vorhersage zurück.
///
/// Ohne geladene Vorhersage passiert nichts.
pub fn reset_curve(state: &mut AppState, curve: CurveId) {
    let Some(original) = state.original_lines.as_ref().map(|o| o.get(curve).clone()) else {
        log::debug!("Zurücksetzen ignoriert: keine Originalkurven vorhanden");
        return;
    };
    if state.curves.is_none() {
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    if let Some(set) = curves_mut(state) {
        *set.get_mut(curve) = original;
    }
    if state.interaction.drag.is_some_and(|d| d.curve == curve) {
        state.interaction.drag = None;
    }
    state.interaction.hover = None;
    log::info!("{:?} auf Originalverlauf zurückgesetzt", curve);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::prediction::apply_prediction;
    use crate::app::state::PredictionSource;
    use crate::core::{CurveSet, NormalizedPoint, PredictionResult};
    use std::sync::Arc;

    #[test]
    fn reset_restores_only_requested_curve() {
        let mut state = AppState::new();
        apply_prediction(&mut state, PredictionResult::demo(), PredictionSource::Demo);

        if let Some(curves) = state.curves.as_mut() {
            let set = Arc::make_mut(curves);
            set.head.points[0] = NormalizedPoint::new(0.0, 0.0);
            set.life.points[0] = NormalizedPoint::new(0.0, 0.0);
        }

        reset_curve(&mut state, CurveId::Head);

        let demo = CurveSet::demo();
        let curves = state.curves.as_deref().cloned().unwrap_or_default();
        assert_eq!(curves.head, demo.head);
        assert_eq!(curves.life.points[0], NormalizedPoint::new(0.0, 0.0));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn reset_without_prediction_is_noop() {
        let mut state = AppState::new();
        reset_curve(&mut state, CurveId::Heart);
        assert!(!state.can_undo());
    }
}
