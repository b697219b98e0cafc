//! Renderer für den ROI-Rahmen.

use super::types::{DrawCommand, DrawList, RenderContext};
use crate::core::Roi;

/// Zeichnet den Umriss der ROI.
pub struct RoiRenderer;

impl RoiRenderer {
    pub fn render(&self, ctx: &RenderContext, list: &mut DrawList, roi: &Roi) {
        let (min, size) = roi.pixel_rect(ctx.surface_size);
        list.push(DrawCommand::StrokeRect {
            min,
            size,
            color: ctx.options.roi_color,
            width: ctx.scale.roi_stroke_width,
        });
    }
}
