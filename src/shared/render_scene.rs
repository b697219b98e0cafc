//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::{DisplayToggles, EditorOptions, ScaleProfile};
use crate::core::{CurveId, CurveSet, KeypointSet, PointRef, Roi, Surface, ViewTransform};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Aktueller Kurvensatz (Arc für O(1)-Clone pro Frame)
    pub curves: Option<Arc<CurveSet>>,
    /// Landmarken der Vorhersage
    pub keypoints: Option<Arc<KeypointSet>>,
    /// Aufgelöste ROI (nie degeneriert)
    pub roi: Roi,
    /// Zeichenfläche
    pub surface: Surface,
    /// Zoom-Transformation, die der Host auf die gerenderte Fläche anwendet
    pub view: ViewTransform,
    pub toggles: DisplayToggles,
    /// Bearbeitungsmodus aktiv (Handles sichtbar)
    pub editing: bool,
    pub active_curve: CurveId,
    /// Punkt unter dem Pointer
    pub hover: Option<PointRef>,
    /// Punkt, der gerade gezogen wird
    pub drag: Option<PointRef>,
    /// Ersatz-Basisbild noch nicht geladen
    pub base_image_pending: bool,
    /// Größenprofil für diesen Frame
    pub scale: ScaleProfile,
    /// Laufzeit-Optionen für Farben und Faktoren
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Kurvensatz für Rendering vorhanden ist.
    pub fn has_curves(&self) -> bool {
        self.curves.is_some()
    }

    /// Overlay nur zeichnen, wenn Kurven geladen sind und kein Basisbild aussteht.
    pub fn should_draw_overlay(&self) -> bool {
        self.has_curves() && !self.base_image_pending && self.surface.has_area()
    }
}
