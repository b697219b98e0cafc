//! Renderer für Landmarken (Kreis, Fadenkreuz, Beschriftung).

use super::types::{DrawCommand, DrawList, RenderContext};
use crate::core::KeypointSet;
use glam::Vec2;

/// Zeichnet die Keypoints im Flächenraum, bei `flipped` horizontal gespiegelt.
pub struct KeypointRenderer;

impl KeypointRenderer {
    pub fn render(&self, ctx: &RenderContext, list: &mut DrawList, keypoints: &KeypointSet) {
        let radius = ctx.scale.keypoint_radius;
        let arm = ctx.scale.keypoint_crosshair;
        let line_width = ctx.scale.roi_stroke_width.max(1.0);

        for (id, center) in keypoints.display_pixels(ctx.surface_size) {
            let color = ctx.options.keypoint_color(id);

            list.push(DrawCommand::FillCircle {
                center,
                radius,
                color,
            });
            list.push(DrawCommand::Line {
                from: center - Vec2::new(arm, 0.0),
                to: center + Vec2::new(arm, 0.0),
                color,
                width: line_width,
            });
            list.push(DrawCommand::Line {
                from: center - Vec2::new(0.0, arm),
                to: center + Vec2::new(0.0, arm),
                color,
                width: line_width,
            });
            list.push(DrawCommand::Text {
                pos: center + Vec2::new(arm + radius * 0.5, -radius * 0.5),
                text: id.key().to_string(),
                size: ctx.scale.label_font_size,
                color,
            });
        }
    }
}
