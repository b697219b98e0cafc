use super::super::state::{EditorTool, PredictionSource};
use crate::core::{CurveId, PredictionResult};
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind bereits in unskalierte Flächenpixel umgerechnet.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Vorhersage als Ganzes übernehmen
    ApplyPrediction {
        result: Box<PredictionResult>,
        source: PredictionSource,
    },
    /// Fehler des Modell-Service melden (Kurven bleiben erhalten)
    ReportPredictionFailure { message: String, time_ms: f64 },
    /// Geladenen Satz komplett verwerfen
    ClearSession,
    /// Ausstehendes Basisbild als gezeichnet markieren
    MarkBaseImageReady,
    SetSurfaceSize { size: Vec2, client_size: Vec2 },
    SetEditingEnabled { enabled: bool },
    SetEditorTool { tool: EditorTool },
    SetActiveCurve { curve: CurveId },
    SetCurveVisibility { curve: CurveId, visible: bool },
    SetKeypointsVisibility { visible: bool },
    /// Punkt auf dem nächstgelegenen Segment einfügen
    InsertPoint { curve: CurveId, surface_px: Vec2 },
    /// Nächstgelegenen sichtbaren Punkt entfernen
    ErasePointAt { surface_px: Vec2, max_distance: f32 },
    /// Drag-Geste auf dem nächstgelegenen Punkt beginnen
    BeginDrag { surface_px: Vec2, max_distance: f32 },
    /// Gezogenen Punkt an neue Position setzen
    DragTo { surface_px: Vec2 },
    EndDrag,
    UpdateHover { surface_px: Vec2, max_distance: f32 },
    ClearHover,
    /// Zoom um Faktor mit neuem Ursprung unter dem Pointer
    ZoomAt { factor: f32, surface_px: Vec2 },
    ZoomIn,
    ZoomOut,
    ResetView,
    Undo,
    ResetCurve { curve: CurveId },
    SetInterpretation { result: serde_json::Value },
    ReportInterpretationFailure { message: String },
}
