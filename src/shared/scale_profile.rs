//! Größenprofil einer Zeichenfläche.
//!
//! Renderer und Hit-Test leiten ihre Pixelgrößen aus demselben Profil ab,
//! damit Handle-Darstellung und Trefferradius nicht auseinanderlaufen.

use super::EditorOptions;

/// Aus `min_side` abgeleitete Pixelgrößen für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleProfile {
    /// Kürzere Flächenseite in Pixeln
    pub min_side: f32,
    /// Linienstärke der Kurven
    pub stroke_width: f32,
    /// Linienstärke des ROI-Rahmens
    pub roi_stroke_width: f32,
    /// Dash-Muster `[Strich, Lücke]`
    pub dash: [f32; 2],
    /// Marker-Radius außerhalb des Bearbeitungsmodus
    pub marker_radius: f32,
    /// Handle-Radius im Bearbeitungsmodus
    pub handle_radius: f32,
    /// Trefferradius beim Hover
    pub hover_hit_radius: f32,
    /// Trefferradius beim Bearbeiten
    pub edit_hit_radius: f32,
    pub keypoint_radius: f32,
    pub keypoint_crosshair: f32,
    pub label_font_size: f32,
}

impl ScaleProfile {
    /// Berechnet das Profil für eine Fläche mit kürzerer Seite `min_side`.
    pub fn new(min_side: f32, options: &EditorOptions) -> Self {
        let min_side = min_side.max(0.0);
        // max/min statt clamp: ungeprüfte Grenzen dürfen nicht paniken
        let stroke_width = (min_side * options.stroke_width_factor)
            .min(options.stroke_width_max_px)
            .max(options.stroke_width_min_px);

        let hover_hit_radius =
            (min_side * options.hover_hit_radius_factor).max(options.hit_radius_min_px);
        let edit_hit_radius = (min_side * options.edit_hit_radius_factor)
            .max(options.hit_radius_min_px)
            .max(hover_hit_radius);

        let keypoint_radius =
            (min_side * options.keypoint_radius_factor).max(options.keypoint_radius_min_px);

        Self {
            min_side,
            stroke_width,
            roi_stroke_width: stroke_width * options.roi_stroke_factor,
            dash: [
                stroke_width * options.dash_length_factor,
                stroke_width * options.dash_gap_factor,
            ],
            marker_radius: stroke_width * options.marker_radius_factor,
            handle_radius: stroke_width
                * options.handle_radius_factor.max(options.marker_radius_factor),
            hover_hit_radius,
            edit_hit_radius,
            keypoint_radius,
            keypoint_crosshair: keypoint_radius * options.keypoint_crosshair_factor,
            label_font_size: keypoint_radius * options.keypoint_label_factor,
        }
    }

    /// Trefferradius für den aktuellen Modus.
    pub fn hit_radius(&self, editing: bool) -> f32 {
        if editing {
            self.edit_hit_radius
        } else {
            self.hover_hit_radius
        }
    }
}
