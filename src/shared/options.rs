//! Zentrale Konfiguration für den PalmTrace Overlay-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Alle Größen sind Faktoren relativ zur kürzeren Flächenseite (`min_side`).

use crate::core::{CurveId, KeypointId, Roi, DEFAULT_ROI};
use serde::{Deserialize, Serialize};

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe der Herzlinie (RGBA, #f06543).
pub const HEART_COLOR: [f32; 4] = [0.941, 0.396, 0.263, 1.0];
/// Farbe der Kopflinie (RGBA, #2b8fb3).
pub const HEAD_COLOR: [f32; 4] = [0.169, 0.561, 0.702, 1.0];
/// Farbe der Lebenslinie (RGBA, #efc45d).
pub const LIFE_COLOR: [f32; 4] = [0.937, 0.769, 0.365, 1.0];
/// Farbe des ROI-Rahmens (dunkel, transparent).
pub const ROI_COLOR: [f32; 4] = [0.122, 0.102, 0.086, 0.15];
/// Farbe der Hover-Markierung.
pub const HOVER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
/// Keypoint `palm_root` (Orangerot).
pub const PALM_ROOT_COLOR: [f32; 4] = [1.0, 0.271, 0.0, 1.0];
/// Keypoint `tiger_mouth` (Himmelblau).
pub const TIGER_MOUTH_COLOR: [f32; 4] = [0.0, 0.749, 1.0, 1.0];
/// Keypoint `palm_center` (Grün).
pub const PALM_CENTER_COLOR: [f32; 4] = [0.0, 0.784, 0.0, 1.0];

// ── Strichstärken ───────────────────────────────────────────────────

/// Linienstärke als Anteil von `min_side`.
pub const STROKE_WIDTH_FACTOR: f32 = 0.004;
/// Untergrenze der Linienstärke in Pixeln.
pub const STROKE_WIDTH_MIN_PX: f32 = 2.0;
/// Obergrenze der Linienstärke in Pixeln.
pub const STROKE_WIDTH_MAX_PX: f32 = 8.0;
/// ROI-Rahmen relativ zur Linienstärke.
pub const ROI_STROKE_FACTOR: f32 = 0.5;
/// Strichlänge des Dash-Musters relativ zur Linienstärke.
pub const DASH_LENGTH_FACTOR: f32 = 2.5;
/// Lückenlänge des Dash-Musters relativ zur Linienstärke.
pub const DASH_GAP_FACTOR: f32 = 2.0;

// ── Handles / Hit-Test ──────────────────────────────────────────────

/// Marker-Radius außerhalb des Bearbeitungsmodus relativ zur Linienstärke.
pub const MARKER_RADIUS_FACTOR: f32 = 1.0;
/// Handle-Radius im Bearbeitungsmodus relativ zur Linienstärke.
pub const HANDLE_RADIUS_FACTOR: f32 = 1.75;
/// Hit-Radius beim Hover als Anteil von `min_side`.
pub const HOVER_HIT_RADIUS_FACTOR: f32 = 0.02;
/// Hit-Radius beim Bearbeiten als Anteil von `min_side` (Touch-Eingabe).
pub const EDIT_HIT_RADIUS_FACTOR: f32 = 0.035;
/// Untergrenze beider Hit-Radien in Pixeln.
pub const HIT_RADIUS_MIN_PX: f32 = 8.0;

// ── Keypoints ───────────────────────────────────────────────────────

/// Keypoint-Radius als Anteil von `min_side`.
pub const KEYPOINT_RADIUS_FACTOR: f32 = 0.015;
/// Untergrenze des Keypoint-Radius in Pixeln.
pub const KEYPOINT_RADIUS_MIN_PX: f32 = 4.0;
/// Halbe Fadenkreuz-Länge relativ zum Keypoint-Radius.
pub const KEYPOINT_CROSSHAIR_FACTOR: f32 = 1.6;
/// Schriftgröße der Beschriftung relativ zum Keypoint-Radius.
pub const KEYPOINT_LABEL_FACTOR: f32 = 1.4;

// ── Zoom ────────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const ZOOM_MIN: f32 = 1.0;
/// Maximaler Zoom-Faktor.
pub const ZOOM_MAX: f32 = 3.0;
/// Zoom-Schritt der Plus/Minus-Schaltflächen.
pub const ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt pro Mausrad-Raste.
pub const WHEEL_ZOOM_STEP: f32 = 1.1;

// ── Historie / Diagnose ─────────────────────────────────────────────

/// Maximale Undo-Tiefe.
pub const HISTORY_DEPTH: usize = 20;
/// Unterhalb dieser kürzeren Bildseite wird eine Auflösungswarnung angezeigt.
pub const LOW_RESOLUTION_MIN_SIDE_PX: f32 = 720.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `palmtrace_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Farben ──────────────────────────────────────────────────
    pub heart_color: [f32; 4],
    pub head_color: [f32; 4],
    pub life_color: [f32; 4],
    pub roi_color: [f32; 4],
    pub hover_color: [f32; 4],
    pub palm_root_color: [f32; 4],
    pub tiger_mouth_color: [f32; 4],
    pub palm_center_color: [f32; 4],

    // ── Strichstärken ───────────────────────────────────────────
    /// Linienstärke als Anteil von `min_side`
    pub stroke_width_factor: f32,
    /// Untergrenze der Linienstärke in Pixeln
    pub stroke_width_min_px: f32,
    /// Obergrenze der Linienstärke in Pixeln
    pub stroke_width_max_px: f32,
    /// ROI-Rahmen relativ zur Linienstärke
    pub roi_stroke_factor: f32,
    /// Dash-Strich relativ zur Linienstärke
    pub dash_length_factor: f32,
    /// Dash-Lücke relativ zur Linienstärke
    pub dash_gap_factor: f32,

    // ── Handles / Hit-Test ──────────────────────────────────────
    pub marker_radius_factor: f32,
    pub handle_radius_factor: f32,
    pub hover_hit_radius_factor: f32,
    pub edit_hit_radius_factor: f32,
    pub hit_radius_min_px: f32,

    // ── Keypoints ───────────────────────────────────────────────
    pub keypoint_radius_factor: f32,
    pub keypoint_radius_min_px: f32,
    pub keypoint_crosshair_factor: f32,
    pub keypoint_label_factor: f32,

    // ── Zoom ────────────────────────────────────────────────────
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_step: f32,
    pub wheel_zoom_step: f32,

    // ── Historie / Daten ────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    pub history_depth: usize,
    /// ROI, wenn die Vorhersage keine liefert
    pub default_roi: Roi,
    /// Schwelle für die Auflösungswarnung (kürzere Seite in Pixeln)
    pub low_resolution_min_side_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            heart_color: HEART_COLOR,
            head_color: HEAD_COLOR,
            life_color: LIFE_COLOR,
            roi_color: ROI_COLOR,
            hover_color: HOVER_COLOR,
            palm_root_color: PALM_ROOT_COLOR,
            tiger_mouth_color: TIGER_MOUTH_COLOR,
            palm_center_color: PALM_CENTER_COLOR,

            stroke_width_factor: STROKE_WIDTH_FACTOR,
            stroke_width_min_px: STROKE_WIDTH_MIN_PX,
            stroke_width_max_px: STROKE_WIDTH_MAX_PX,
            roi_stroke_factor: ROI_STROKE_FACTOR,
            dash_length_factor: DASH_LENGTH_FACTOR,
            dash_gap_factor: DASH_GAP_FACTOR,

            marker_radius_factor: MARKER_RADIUS_FACTOR,
            handle_radius_factor: HANDLE_RADIUS_FACTOR,
            hover_hit_radius_factor: HOVER_HIT_RADIUS_FACTOR,
            edit_hit_radius_factor: EDIT_HIT_RADIUS_FACTOR,
            hit_radius_min_px: HIT_RADIUS_MIN_PX,

            keypoint_radius_factor: KEYPOINT_RADIUS_FACTOR,
            keypoint_radius_min_px: KEYPOINT_RADIUS_MIN_PX,
            keypoint_crosshair_factor: KEYPOINT_CROSSHAIR_FACTOR,
            keypoint_label_factor: KEYPOINT_LABEL_FACTOR,

            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            wheel_zoom_step: WHEEL_ZOOM_STEP,

            history_depth: HISTORY_DEPTH,
            default_roi: DEFAULT_ROI,
            low_resolution_min_side_px: LOW_RESOLUTION_MIN_SIDE_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Bereinigt geladene Werte.
    ///
    /// Nicht-endliche oder negative Größen fallen auf die `const`-Defaults
    /// zurück, Zoom-Schritte müssen größer 0 sein, und die Paare
    /// Linienstärke und Zoom erfüllen danach `min <= max`.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        for (color, fallback) in [
            (&mut self.heart_color, defaults.heart_color),
            (&mut self.head_color, defaults.head_color),
            (&mut self.life_color, defaults.life_color),
            (&mut self.roi_color, defaults.roi_color),
            (&mut self.hover_color, defaults.hover_color),
            (&mut self.palm_root_color, defaults.palm_root_color),
            (&mut self.tiger_mouth_color, defaults.tiger_mouth_color),
            (&mut self.palm_center_color, defaults.palm_center_color),
        ] {
            if !color.iter().all(|c| c.is_finite()) {
                *color = fallback;
            }
        }

        for (value, fallback) in [
            (&mut self.stroke_width_factor, STROKE_WIDTH_FACTOR),
            (&mut self.stroke_width_min_px, STROKE_WIDTH_MIN_PX),
            (&mut self.stroke_width_max_px, STROKE_WIDTH_MAX_PX),
            (&mut self.roi_stroke_factor, ROI_STROKE_FACTOR),
            (&mut self.dash_length_factor, DASH_LENGTH_FACTOR),
            (&mut self.dash_gap_factor, DASH_GAP_FACTOR),
            (&mut self.marker_radius_factor, MARKER_RADIUS_FACTOR),
            (&mut self.handle_radius_factor, HANDLE_RADIUS_FACTOR),
            (&mut self.hover_hit_radius_factor, HOVER_HIT_RADIUS_FACTOR),
            (&mut self.edit_hit_radius_factor, EDIT_HIT_RADIUS_FACTOR),
            (&mut self.hit_radius_min_px, HIT_RADIUS_MIN_PX),
            (&mut self.keypoint_radius_factor, KEYPOINT_RADIUS_FACTOR),
            (&mut self.keypoint_radius_min_px, KEYPOINT_RADIUS_MIN_PX),
            (&mut self.keypoint_crosshair_factor, KEYPOINT_CROSSHAIR_FACTOR),
            (&mut self.keypoint_label_factor, KEYPOINT_LABEL_FACTOR),
            (&mut self.zoom_min, ZOOM_MIN),
            (&mut self.zoom_max, ZOOM_MAX),
            (&mut self.low_resolution_min_side_px, LOW_RESOLUTION_MIN_SIDE_PX),
        ] {
            if !value.is_finite() || *value < 0.0 {
                *value = fallback;
            }
        }

        for (step, fallback) in [
            (&mut self.zoom_step, ZOOM_STEP),
            (&mut self.wheel_zoom_step, WHEEL_ZOOM_STEP),
        ] {
            if !step.is_finite() || *step <= 0.0 {
                *step = fallback;
            }
        }

        self.stroke_width_max_px = self.stroke_width_max_px.max(self.stroke_width_min_px);
        self.zoom_min = self.zoom_min.clamp(ZOOM_MIN, ZOOM_MAX);
        self.zoom_max = self.zoom_max.clamp(self.zoom_min, ZOOM_MAX);

        if !self.default_roi.is_valid() {
            log::warn!("Ungültige default_roi in den Optionen, verwende Standard-ROI");
            self.default_roi = DEFAULT_ROI;
        }

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("palmtrace-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("palmtrace_editor.toml")
    }

    /// Linienfarbe einer Kurve.
    pub fn curve_color(&self, id: CurveId) -> [f32; 4] {
        match id {
            CurveId::Heart => self.heart_color,
            CurveId::Head => self.head_color,
            CurveId::Life => self.life_color,
        }
    }

    /// Farbe einer Landmarke.
    pub fn keypoint_color(&self, id: KeypointId) -> [f32; 4] {
        match id {
            KeypointId::PalmRoot => self.palm_root_color,
            KeypointId::TigerMouth => self.tiger_mouth_color,
            KeypointId::PalmCenter => self.palm_center_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut opts = EditorOptions::default();
        opts.history_depth = 5;
        opts.head_color = [0.0, 0.0, 1.0, 1.0];
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(back, opts);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str("zoom_max = 2.5\n").expect("parsebar");
        assert_eq!(opts.zoom_max, 2.5);
        assert_eq!(opts.history_depth, HISTORY_DEPTH);
        assert_eq!(opts.default_roi, DEFAULT_ROI);
    }

    #[test]
    fn sanitized_replaces_non_finite_and_inverted_values() {
        let opts: EditorOptions = toml::from_str(
            "stroke_width_min_px = nan\nstroke_width_factor = inf\nzoom_min = 5.0\nzoom_max = 0.5\nwheel_zoom_step = 0.0\nheart_color = [nan, 0.0, 0.0, 1.0]\n",
        )
        .expect("parsebar");
        let opts = opts.sanitized();

        assert_eq!(opts.stroke_width_min_px, STROKE_WIDTH_MIN_PX);
        assert_eq!(opts.stroke_width_factor, STROKE_WIDTH_FACTOR);
        assert_eq!(opts.wheel_zoom_step, WHEEL_ZOOM_STEP);
        assert_eq!(opts.heart_color, HEART_COLOR);
        assert_eq!(opts.zoom_min, ZOOM_MAX);
        assert_eq!(opts.zoom_max, ZOOM_MAX);
        assert!(opts.stroke_width_min_px <= opts.stroke_width_max_px);
    }

    #[test]
    fn sanitized_keeps_valid_options() {
        let mut opts = EditorOptions::default();
        opts.stroke_width_min_px = 3.0;
        opts.zoom_max = 2.0;
        assert_eq!(opts.clone().sanitized(), opts);
    }

    #[test]
    fn loading_nan_stroke_width_does_not_panic() {
        let path = std::env::temp_dir().join(format!(
            "palmtrace_editor_nan_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "stroke_width_min_px = nan\n").expect("schreibbar");
        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(opts.stroke_width_min_px, STROKE_WIDTH_MIN_PX);
        let profile = crate::shared::ScaleProfile::new(1000.0, &opts);
        assert!(profile.stroke_width.is_finite());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/palmtrace_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
