use super::curves_mut;
use crate::app::AppState;
use crate::core::{nearest_segment, CurveId};
use glam::Vec2;

/// Fügt an der Pointer-Position einen Punkt in `curve` ein.
///
/// Ziel ist das Segment mit minimaler Projektionsdistanz; der neue Punkt landet
/// direkt hinter dessen Anfangsindex. Kurven mit weniger als zwei Punkten
/// bleiben unverändert (keine History).
pub fn insert_point(state: &mut AppState, curve: CurveId, surface_px: Vec2) {
    let Some(curves) = state.curves.as_deref() else {
        log::debug!("Einfügen ignoriert: kein Kurvensatz geladen");
        return;
    };
    let roi = state.active_roi();
    let size = state.view.surface.size;

    let Some(projection) = nearest_segment(&curves.get(curve).points, &roi, size, surface_px)
    else {
        log::debug!("Einfügen abgelehnt: {:?} hat weniger als 2 Punkte", curve);
        return;
    };
    let point = roi.from_pixel(surface_px, size);

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let inserted = curves_mut(state)
        .is_some_and(|set| set.get_mut(curve).insert_after(projection.start_index, point));
    if inserted {
        state.interaction.hover = None;
        log::info!(
            "Punkt in {:?} an Index {} eingefügt ({:.3}, {:.3})",
            curve,
            projection.insert_index(),
            point.x,
            point.y
        );
    }
}
