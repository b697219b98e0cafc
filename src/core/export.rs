//! Versionierter Export-Snapshot des aktuellen Bearbeitungsstands.

use super::{Confidences, CurveSet, KeypointSet, Roi};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format-Version des Exports.
pub const EXPORT_VERSION: u32 = 1;

/// Exportartefakt `{version, generated_at, roi, lines, confidences, keypoints}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSnapshot {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub roi: Roi,
    pub lines: CurveSet,
    pub confidences: Option<Confidences>,
    pub keypoints: KeypointSet,
}

impl ExportSnapshot {
    /// Erstellt einen Snapshot mit explizitem Zeitstempel.
    pub fn new(
        generated_at: DateTime<Utc>,
        roi: Roi,
        lines: CurveSet,
        confidences: Option<Confidences>,
        keypoints: KeypointSet,
    ) -> Self {
        Self {
            version: EXPORT_VERSION,
            generated_at,
            roi,
            lines,
            confidences,
            keypoints,
        }
    }

    /// Serialisiert den Snapshot als eingerücktes JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Export konnte nicht serialisiert werden")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn export_json_has_versioned_layout() {
        let ts = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("gültiges Datum");
        let snapshot = ExportSnapshot::new(
            ts,
            Roi::FULL,
            CurveSet::demo(),
            None,
            KeypointSet::default(),
        );
        let json = snapshot.to_json_pretty().expect("serialisierbar");
        let value: serde_json::Value = serde_json::from_str(&json).expect("gültiges JSON");
        assert_eq!(value["version"], 1);
        assert_eq!(value["generated_at"], "2026-03-01T12:00:00Z");
        assert_eq!(value["lines"]["heart"].as_array().map(Vec::len), Some(20));
        assert!(value["confidences"].is_null());
    }
}
