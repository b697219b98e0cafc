use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{Confidences, CurveSet, KeypointSet, Roi};
use crate::shared::{EditorOptions, ScaleProfile};
use std::sync::Arc;

use super::{InteractionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktueller (ggf. bearbeiteter) Kurvensatz (None = nichts geladen)
    pub curves: Option<Arc<CurveSet>>,
    /// Kurvensatz zum Zeitpunkt des Ladens (für Zurücksetzen einzelner Kurven)
    pub original_lines: Option<Arc<CurveSet>>,
    /// Landmarken der aktuellen Vorhersage
    pub keypoints: Option<Arc<KeypointSet>>,
    /// ROI der aktuellen Vorhersage (None = Default-ROI aus den Optionen)
    pub roi: Option<Roi>,
    /// Konfidenzen der aktuellen Vorhersage
    pub confidences: Option<Confidences>,
    /// View-State
    pub view: ViewState,
    /// Interaktions-State (Werkzeug, aktive Kurve, Geste)
    pub interaction: InteractionState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Zoom, History-Tiefe)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            curves: None,
            original_lines: None,
            keypoints: None,
            roi: None,
            confidences: None,
            view: ViewState::new(),
            interaction: InteractionState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
        }
    }

    /// Gibt die Gesamtzahl der Kurvenpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.curves.as_ref().map_or(0, |c| c.total_points())
    }

    /// Gültige ROI für Umrechnungen (fällt auf die Default-ROI zurück).
    pub fn active_roi(&self) -> Roi {
        Roi::resolve(self.roi, self.options.default_roi)
    }

    /// Größenprofil der aktuellen Zeichenfläche.
    pub fn scale_profile(&self) -> ScaleProfile {
        ScaleProfile::new(self.view.surface.min_side(), &self.options)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
