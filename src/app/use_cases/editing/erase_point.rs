use super::curves_mut;
use crate::app::use_cases::picking::pick_point;
use crate::app::AppState;
use glam::Vec2;

/// Entfernt den nächstgelegenen sichtbaren Punkt innerhalb `max_distance`.
///
/// Abgelehnt (ohne History), wenn nichts getroffen wurde oder die Kurve
/// danach weniger als zwei Punkte hätte.
pub fn erase_point_at(state: &mut AppState, surface_px: Vec2, max_distance: f32) {
    let Some(hit) = pick_point(state, surface_px, max_distance) else {
        log::debug!("Löschen: kein Punkt im Radius {:.1}px", max_distance);
        return;
    };
    let removable = state
        .curves
        .as_ref()
        .is_some_and(|c| c.get(hit.point.curve).can_remove_point());
    if !removable {
        log::debug!(
            "Punkt nicht entfernbar: {:?} hätte weniger als 2 Punkte",
            hit.point.curve
        );
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let removed = curves_mut(state)
        .is_some_and(|set| set.get_mut(hit.point.curve).remove_point(hit.point.index));
    if removed {
        state.interaction.hover = None;
        log::info!(
            "Punkt {} aus {:?} entfernt",
            hit.point.index,
            hit.point.curve
        );
    }
}
