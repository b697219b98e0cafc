//! Overlay-Rendering in eine backend-neutrale Display-Liste.

mod curve_renderer;
mod handle_renderer;
mod keypoint_renderer;
mod roi_renderer;
pub mod svg;
mod types;

pub use crate::shared::RenderScene;
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use handle_renderer::HandleRenderer;
pub(crate) use keypoint_renderer::KeypointRenderer;
pub(crate) use roi_renderer::RoiRenderer;
pub use types::{Color, DrawCommand, DrawList};
use types::RenderContext;

/// Haupt-Renderer für das Handlinien-Overlay.
///
/// Zustandslos pro Aufruf: `render_scene()` liest nur die Szene und baut
/// jedes Mal eine vollständige Display-Liste neu auf.
pub struct OverlayRenderer {
    roi_renderer: RoiRenderer,
    curve_renderer: CurveRenderer,
    handle_renderer: HandleRenderer,
    keypoint_renderer: KeypointRenderer,
}

impl OverlayRenderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self {
            roi_renderer: RoiRenderer,
            curve_renderer: CurveRenderer,
            handle_renderer: HandleRenderer,
            keypoint_renderer: KeypointRenderer,
        }
    }

    /// Rendert die komplette Szene.
    ///
    /// Die Liste beginnt immer mit `Clear`. Ohne Kurvensatz oder bei
    /// ausstehendem Basisbild bleibt es dabei.
    pub fn render_scene(&self, scene: &RenderScene) -> DrawList {
        let mut list = DrawList::new(scene.surface.size, scene.view);
        list.push(DrawCommand::Clear);

        if !scene.should_draw_overlay() {
            log::debug!(
                "Overlay übersprungen (Kurven: {}, Basisbild ausstehend: {})",
                scene.has_curves(),
                scene.base_image_pending
            );
            return list;
        }
        let Some(curves) = scene.curves.as_deref() else {
            return list;
        };

        let ctx = RenderContext {
            surface_size: scene.surface.size,
            scale: &scene.scale,
            options: &scene.options,
            editing: scene.editing,
        };

        // 1. ROI-Rahmen
        self.roi_renderer.render(&ctx, &mut list, &scene.roi);

        // 2. Kurven
        self.curve_renderer
            .render(&ctx, &mut list, curves, &scene.roi, &scene.toggles);

        // 3. Handles (nur im Bearbeitungsmodus) und Hover-Marker
        self.handle_renderer
            .render(&ctx, &mut list, curves, &scene.roi, &scene.toggles);
        if let Some(target) = scene.drag.or(scene.hover) {
            self.handle_renderer.render_hover(
                &ctx,
                &mut list,
                curves,
                &scene.roi,
                &scene.toggles,
                target,
            );
        }

        // 4. Keypoints (zuoberst)
        if scene.toggles.keypoints {
            if let Some(keypoints) = scene.keypoints.as_deref() {
                self.keypoint_renderer.render(&ctx, &mut list, keypoints);
            }
        }

        list
    }
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new()
    }
}
