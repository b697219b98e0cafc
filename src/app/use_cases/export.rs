//! Use-Case-Funktionen für den Export des Bearbeitungsstands.

use crate::app::AppState;
use crate::core::ExportSnapshot;
use chrono::{DateTime, Utc};

/// Export-Snapshot mit aktuellem Zeitstempel. `None` ohne geladenen Kurvensatz.
pub fn build_snapshot(state: &AppState) -> Option<ExportSnapshot> {
    snapshot_at(state, Utc::now())
}

/// Export-Snapshot zu einem festen Zeitpunkt.
///
/// Spiegelt immer den Live-Stand inkl. Bearbeitungen, nicht die Originalvorhersage.
pub fn snapshot_at(state: &AppState, generated_at: DateTime<Utc>) -> Option<ExportSnapshot> {
    let curves = state.curves.as_deref()?;
    Some(ExportSnapshot::new(
        generated_at,
        state.active_roi(),
        curves.clone(),
        state.confidences,
        state.keypoints.as_deref().cloned().unwrap_or_default(),
    ))
}
