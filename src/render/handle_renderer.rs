//! Renderer für Bearbeitungs-Handles und den Hover-Marker.

use super::types::{DrawCommand, DrawList, RenderContext};
use crate::core::{CurveSet, PointRef, Roi};
use crate::shared::DisplayToggles;

/// Vergrößerung des Hover-Markers gegenüber dem Basisradius.
const HOVER_MARKER_FACTOR: f32 = 1.5;

/// Zeichnet Handles an allen Punkten sichtbarer Kurven (nur im Bearbeitungsmodus)
/// und den Marker unter dem Pointer.
pub struct HandleRenderer;

impl HandleRenderer {
    pub fn render(
        &self,
        ctx: &RenderContext,
        list: &mut DrawList,
        curves: &CurveSet,
        roi: &Roi,
        toggles: &DisplayToggles,
    ) {
        if !ctx.editing {
            return;
        }

        for (id, curve) in curves.iter() {
            if !toggles.is_curve_visible(id) {
                continue;
            }
            let color = ctx.options.curve_color(id);
            for &p in &curve.points {
                list.push(DrawCommand::FillCircle {
                    center: roi.to_pixel(p, ctx.surface_size),
                    radius: ctx.scale.handle_radius,
                    color,
                });
            }
        }
    }

    /// Marker für den Punkt unter dem Pointer bzw. den gezogenen Punkt.
    ///
    /// Verschwindet, wenn die Referenz nicht mehr auf einen existierenden
    /// Punkt einer sichtbaren Kurve zeigt.
    pub fn render_hover(
        &self,
        ctx: &RenderContext,
        list: &mut DrawList,
        curves: &CurveSet,
        roi: &Roi,
        toggles: &DisplayToggles,
        target: PointRef,
    ) {
        if !toggles.is_curve_visible(target.curve) {
            return;
        }
        let Some(point) = curves.point(target) else {
            return;
        };

        let base = if ctx.editing {
            ctx.scale.handle_radius
        } else {
            ctx.scale.marker_radius
        };
        list.push(DrawCommand::FillCircle {
            center: roi.to_pixel(point, ctx.surface_size),
            radius: base * HOVER_MARKER_FACTOR,
            color: ctx.options.hover_color,
        });
    }
}
