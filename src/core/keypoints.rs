//! Anatomische Landmarken (Keypoints) einer Vorhersage.
//!
//! Positionen sind auf die gesamte Zeichenfläche normalisiert, nicht auf die ROI.

use super::NormalizedPoint;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Benannte Landmarke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypointId {
    PalmRoot,
    TigerMouth,
    PalmCenter,
}

impl KeypointId {
    /// Alle Landmarken in Zeichenreihenfolge.
    pub const ALL: [KeypointId; 3] = [
        KeypointId::PalmRoot,
        KeypointId::TigerMouth,
        KeypointId::PalmCenter,
    ];

    /// Schlüssel im JSON-Payload und Beschriftung im Overlay.
    pub fn key(self) -> &'static str {
        match self {
            KeypointId::PalmRoot => "palm_root",
            KeypointId::TigerMouth => "tiger_mouth",
            KeypointId::PalmCenter => "palm_center",
        }
    }
}

/// Satz der Landmarken inkl. Spiegel-Flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypointSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palm_root: Option<NormalizedPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiger_mouth: Option<NormalizedPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palm_center: Option<NormalizedPoint>,
    /// Horizontale Spiegelung vor der Pixel-Umrechnung anwenden
    pub flipped: bool,
    /// Erkannte Hand ("Left"/"Right"), leer wenn unbekannt
    pub handedness: String,
}

impl KeypointSet {
    /// Rohe (ungespiegelte) Position einer Landmarke.
    pub fn get(&self, id: KeypointId) -> Option<NormalizedPoint> {
        match id {
            KeypointId::PalmRoot => self.palm_root,
            KeypointId::TigerMouth => self.tiger_mouth,
            KeypointId::PalmCenter => self.palm_center,
        }
    }

    /// Ob keine einzige Landmarke vorhanden ist.
    pub fn is_empty(&self) -> bool {
        KeypointId::ALL.iter().all(|id| self.get(*id).is_none())
    }

    /// Darstellungsposition in Flächenpixeln, bei `flipped` an der Vertikalen gespiegelt.
    pub fn display_pixel(&self, id: KeypointId, surface_size: Vec2) -> Option<Vec2> {
        let p = self.get(id)?;
        let x = if self.flipped { 1.0 - p.x } else { p.x };
        Some(Vec2::new(x, p.y) * surface_size)
    }

    /// Alle vorhandenen Landmarken mit Darstellungsposition.
    pub fn display_pixels(
        &self,
        surface_size: Vec2,
    ) -> impl Iterator<Item = (KeypointId, Vec2)> + '_ {
        KeypointId::ALL
            .into_iter()
            .filter_map(move |id| self.display_pixel(id, surface_size).map(|px| (id, px)))
    }
}
