use crate::core::{CurveId, PointRef};
use serde::{Deserialize, Serialize};

/// Aktives Bearbeitungswerkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTool {
    /// Punkte greifen und verschieben
    #[default]
    Drag,
    /// Punkt auf dem nächstgelegenen Segment der aktiven Kurve einfügen
    Add,
    /// Nächstgelegenen Punkt entfernen
    Erase,
}

/// Zustand der Interaktions-Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    /// Bearbeitung ausgeschaltet
    Idle,
    /// Bearbeitung an, keine laufende Geste
    EditingIdle,
    /// Punkt wird gezogen
    Dragging,
}

/// Werkzeug-, Kurven- und Gestenzustand
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub editing_enabled: bool,
    pub tool: EditorTool,
    /// Zielkurve für Einfügen und Zurücksetzen
    pub active_curve: CurveId,
    /// Punkt der laufenden Drag-Geste
    pub drag: Option<PointRef>,
    /// Punkt unter dem Pointer
    pub hover: Option<PointRef>,
}

impl InteractionState {
    /// Erstellt den Standardzustand (Bearbeitung aus, Drag-Werkzeug, Herzlinie).
    pub fn new() -> Self {
        Self::default()
    }

    /// Leitet die aktuelle Phase aus den Flags ab.
    pub fn phase(&self) -> InteractionPhase {
        match (self.editing_enabled, self.drag) {
            (false, _) => InteractionPhase::Idle,
            (true, Some(_)) => InteractionPhase::Dragging,
            (true, None) => InteractionPhase::EditingIdle,
        }
    }

    /// Beendet eine laufende Geste und vergisst den Hover-Punkt.
    pub fn clear_gesture(&mut self) {
        self.drag = None;
        self.hover = None;
    }
}
