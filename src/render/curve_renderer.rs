//! Renderer für die Handlinien als Linienzüge.

use super::types::{DrawCommand, DrawList, RenderContext};
use crate::core::{CurveSet, Roi};
use crate::shared::DisplayToggles;

/// Zeichnet alle sichtbaren Kurven, durch die ROI auf Flächenpixel abgebildet.
pub struct CurveRenderer;

impl CurveRenderer {
    pub fn render(
        &self,
        ctx: &RenderContext,
        list: &mut DrawList,
        curves: &CurveSet,
        roi: &Roi,
        toggles: &DisplayToggles,
    ) {
        for (id, curve) in curves.iter() {
            if !toggles.is_curve_visible(id) || curve.is_empty() {
                continue;
            }

            let points = curve
                .points
                .iter()
                .map(|&p| roi.to_pixel(p, ctx.surface_size))
                .collect();

            list.push(DrawCommand::Polyline {
                points,
                color: ctx.options.curve_color(id),
                width: ctx.scale.stroke_width,
                dash: id.is_dashed().then_some(ctx.scale.dash),
            });
        }
    }
}
