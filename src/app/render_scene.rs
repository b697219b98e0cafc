//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Das Größenprofil wird hier einmal pro Frame berechnet und vom Renderer
/// übernommen; der Hit-Test nutzt dieselbe Berechnung über `AppState::scale_profile`.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        curves: state.curves.clone(),
        keypoints: state.keypoints.clone(),
        roi: state.active_roi(),
        surface: state.view.surface,
        view: state.view.transform,
        toggles: state.view.toggles,
        editing: state.interaction.editing_enabled,
        active_curve: state.interaction.active_curve,
        hover: state.interaction.hover,
        drag: state.interaction.drag,
        base_image_pending: state.view.base_image_pending,
        scale: state.scale_profile(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{CurveSet, Surface, DEFAULT_ROI};
    use glam::Vec2;
    use std::sync::Arc;

    #[test]
    fn empty_state_has_nothing_to_draw() {
        let state = AppState::new();
        let scene = build(&state);
        assert!(!scene.has_curves());
        assert!(!scene.should_draw_overlay());
        assert_eq!(scene.roi, DEFAULT_ROI);
    }

    #[test]
    fn pending_base_image_suppresses_overlay() {
        let mut state = AppState::new();
        state.view.surface = Surface::new(Vec2::new(1080.0, 1440.0));
        state.curves = Some(Arc::new(CurveSet::demo()));
        assert!(build(&state).should_draw_overlay());

        state.view.base_image_pending = true;
        assert!(!build(&state).should_draw_overlay());
    }

    #[test]
    fn scale_profile_follows_surface() {
        let mut state = AppState::new();
        state.view.surface = Surface::new(Vec2::new(1000.0, 2000.0));
        let scene = build(&state);
        assert_eq!(scene.scale.min_side, 1000.0);
        assert_eq!(scene.scale, state.scale_profile());
    }
}
