//! Sichtbarkeitsschalter für Kurven und Keypoints.

use crate::core::CurveId;
use serde::{Deserialize, Serialize};

/// Unabhängige Sichtbarkeits-Flags. Filtern Darstellung und Hit-Test,
/// verändern aber nie die Daten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayToggles {
    pub heart: bool,
    pub head: bool,
    pub life: bool,
    pub keypoints: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            heart: true,
            head: true,
            life: true,
            keypoints: true,
        }
    }
}

impl DisplayToggles {
    /// Ob eine Kurve sichtbar ist.
    pub fn is_curve_visible(&self, id: CurveId) -> bool {
        match id {
            CurveId::Heart => self.heart,
            CurveId::Head => self.head,
            CurveId::Life => self.life,
        }
    }

    /// Setzt die Sichtbarkeit einer Kurve.
    pub fn set_curve_visible(&mut self, id: CurveId, visible: bool) {
        match id {
            CurveId::Heart => self.heart = visible,
            CurveId::Head => self.head = visible,
            CurveId::Life => self.life = visible,
        }
    }
}
