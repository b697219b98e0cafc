use super::super::state::EditorTool;
use crate::core::{CurveId, PredictionResult};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Eingaben aus Host/UI/Service ohne direkte Mutationslogik.
///
/// Pointer-Positionen sind rohe Layout-Pixel relativ zur Bounding-Box der
/// Zeichenfläche. Serialisierbar, damit Sessions aufgezeichnet und
/// wiedergegeben werden können.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppIntent {
    /// Vorhersage des Modell-Service ist eingetroffen
    PredictionReceived { result: Box<PredictionResult> },
    /// Vorhersage fehlgeschlagen (Transport- oder Modellfehler)
    PredictionFailed {
        message: String,
        #[serde(default)]
        time_ms: f64,
    },
    /// Demo-Kurven ohne Modell-Service erzeugen
    DemoRequested,
    /// Alles Geladene verwerfen (Reset-Schaltfläche)
    ResetRequested,
    /// Ersatz-Basisbild wurde gezeichnet
    BaseImageReady,
    /// Zeichenfläche hat neue Pixel- bzw. Layout-Größe
    SurfaceResized { size: Vec2, client_size: Vec2 },
    /// Bearbeitungsmodus ein-/ausschalten
    EditingToggled { enabled: bool },
    /// Werkzeug wählen
    ToolSelected { tool: EditorTool },
    /// Zielkurve für Einfügen/Zurücksetzen wählen
    ActiveCurveSelected { curve: CurveId },
    /// Sichtbarkeit einer Kurve ändern
    CurveVisibilityChanged { curve: CurveId, visible: bool },
    /// Sichtbarkeit der Keypoints ändern
    KeypointsVisibilityChanged { visible: bool },
    PointerDown { pos: Vec2 },
    PointerMoved { pos: Vec2 },
    PointerUp,
    PointerLeft,
    /// Mausrad; negatives `delta_y` zoomt hinein
    Wheel { pos: Vec2, delta_y: f32 },
    ZoomInRequested,
    ZoomOutRequested,
    /// Zoom und Ursprung zurücksetzen
    ResetViewRequested,
    UndoRequested,
    /// Aktive Kurve auf den geladenen Stand zurücksetzen
    ResetActiveCurveRequested,
    /// Antwort des Interpretations-Service
    InterpretationReceived { result: serde_json::Value },
    InterpretationFailed { message: String },
}
