use super::curves_mut;
use crate::app::use_cases::picking::pick_point;
use crate::app::AppState;
use glam::Vec2;

/// Move-Lifecycle Start: greift den nächstgelegenen sichtbaren Punkt.
///
/// Bei Treffer wird genau ein Undo-Snapshot angelegt, sodass die gesamte
/// Geste ein einziger Undo-Schritt ist.
pub fn begin_drag(state: &mut AppState, surface_px: Vec2, max_distance: f32) {
    let Some(hit) = pick_point(state, surface_px, max_distance) else {
        log::debug!("Drag: kein Punkt im Radius {:.1}px", max_distance);
        return;
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    state.interaction.drag = Some(hit.point);
    state.interaction.hover = Some(hit.point);
    log::debug!(
        "Drag gestartet: {:?}[{}] ({:.1}px)",
        hit.point.curve,
        hit.point.index,
        hit.distance
    );
}

/// Move-Lifecycle Update: setzt den gezogenen Punkt auf die Pointer-Position.
///
/// Kein weiterer Snapshot. Zeigt das Drag-Ziel nicht mehr auf einen
/// existierenden Punkt, wird die Geste beendet.
pub fn drag_to(state: &mut AppState, surface_px: Vec2) {
    let Some(target) = state.interaction.drag else {
        return;
    };
    let point = state.active_roi().from_pixel(surface_px, state.view.surface.size);
    let moved = curves_mut(state)
        .is_some_and(|set| set.get_mut(target.curve).set_point(target.index, point));
    if !moved {
        log::warn!(
            "Drag-Ziel {:?}[{}] existiert nicht mehr",
            target.curve,
            target.index
        );
        state.interaction.drag = None;
    }
}

/// Move-Lifecycle Ende.
pub fn end_drag(state: &mut AppState) {
    if let Some(target) = state.interaction.drag.take() {
        log::info!("Punkt {:?}[{}] verschoben", target.curve, target.index);
    }
}
