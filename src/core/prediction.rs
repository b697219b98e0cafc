//! Vorhersage-Payload des Modell-Service.

use super::{CurveId, CurveSet, KeypointSet, Roi};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Standardmeldung, wenn der Service `ok: false` ohne Fehlertext liefert.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Modellerkennung fehlgeschlagen.";

/// Konfidenz je Handlinie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Confidences {
    pub heart: f32,
    pub head: f32,
    pub life: f32,
}

impl Confidences {
    /// Konfidenz einer Kurve.
    pub fn get(&self, id: CurveId) -> f32 {
        match id {
            CurveId::Heart => self.heart,
            CurveId::Head => self.head,
            CurveId::Life => self.life,
        }
    }
}

/// Ergebnisobjekt einer Vorhersage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResult {
    pub ok: bool,
    pub error: Option<String>,
    /// Kurven im ROI-Raum; `None`, wenn der Service keine Linien liefert
    pub lines: Option<CurveSet>,
    pub confidences: Option<Confidences>,
    pub keypoints: Option<KeypointSet>,
    pub roi: Option<Roi>,
    pub warnings: Vec<String>,
    pub time_ms: f64,
    /// Ersatz-Basisbild als Data-URL
    pub base_image: Option<String>,
}

impl Default for PredictionResult {
    fn default() -> Self {
        Self {
            ok: true,
            error: None,
            lines: None,
            confidences: None,
            keypoints: None,
            roi: None,
            warnings: Vec::new(),
            time_ms: 0.0,
            base_image: None,
        }
    }
}

impl PredictionResult {
    /// Parst einen Payload. `ok: false` wird zum Fehler mit der gelieferten Meldung.
    pub fn from_json(json: &str) -> Result<Self> {
        let result: PredictionResult =
            serde_json::from_str(json).context("Vorhersage-Payload ist kein gültiges JSON")?;
        if !result.ok {
            let message = result
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            bail!(message);
        }
        Ok(result)
    }

    /// Vorhersage aus lokal erzeugten Demo-Kurven.
    pub fn demo() -> Self {
        Self {
            lines: Some(CurveSet::demo()),
            ..Default::default()
        }
    }
}
