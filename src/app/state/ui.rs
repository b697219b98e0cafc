/// Schweregrad einer Statusmeldung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Nutzer-sichtbare Statusmeldung
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Herkunft des geladenen Kurvensatzes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    /// Lokal erzeugte Demo-Kurven
    Demo,
    /// Ergebnis des Modell-Service
    Backend,
}

/// UI-bezogener Anwendungszustand (Statuszeile, Kennzahlen, Interpretation)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktuelle Statusmeldungen
    pub status: Vec<StatusMessage>,
    /// Laufzeit der letzten Vorhersage in Millisekunden
    pub time_ms: f64,
    pub source: Option<PredictionSource>,
    /// Warnungen der letzten Vorhersage
    pub warnings: Vec<String>,
    /// Letzte Antwort des Interpretations-Service (nur Anzeige)
    pub interpretation: Option<serde_json::Value>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt alle Statusmeldungen durch eine einzelne.
    pub fn set_status(&mut self, message: StatusMessage) {
        self.status.clear();
        self.status.push(message);
    }

    /// Laufzeitanzeige, z.B. `"412 ms"` oder `"-"`.
    pub fn time_label(&self) -> String {
        if self.time_ms > 0.0 {
            format!("{:.0} ms", self.time_ms)
        } else {
            "-".to_string()
        }
    }
}

/// Formatiert eine Konfidenz als Prozentwert (`"87%"`) oder `"-"`.
pub fn format_confidence(value: Option<f32>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", (v * 100.0).round() as i32),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_rounded_percent() {
        assert_eq!(format_confidence(Some(0.867)), "87%");
        assert_eq!(format_confidence(Some(0.0)), "0%");
        assert_eq!(format_confidence(None), "-");
        assert_eq!(format_confidence(Some(f32::NAN)), "-");
    }

    #[test]
    fn time_label_hides_zero() {
        let mut ui = UiState::new();
        assert_eq!(ui.time_label(), "-");
        ui.time_ms = 412.4;
        assert_eq!(ui.time_label(), "412 ms");
    }
}
