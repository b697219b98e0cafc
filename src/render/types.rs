//! Rendering-Typen: Zeichenbefehle, Display-Liste und gemeinsamer Kontext.

use crate::core::ViewTransform;
use crate::shared::{EditorOptions, ScaleProfile};
use glam::Vec2;

/// RGBA-Farbe mit Komponenten in `[0, 1]`.
pub type Color = [f32; 4];

/// Backend-neutraler Zeichenbefehl in unskalierten Flächenpixeln.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gesamte Fläche leeren
    Clear,
    /// Rechteck-Umriss
    StrokeRect {
        min: Vec2,
        size: Vec2,
        color: Color,
        width: f32,
    },
    /// Offener Linienzug; `dash = Some([Strich, Lücke])` für gestrichelte Linien
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
        dash: Option<[f32; 2]>,
    },
    /// Gefüllter Kreis
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Einzelne Linie
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    /// Textbeschriftung, `pos` ist die linke Grundlinie
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
}

/// Ergebnis eines Render-Durchlaufs.
///
/// Die Befehle liegen im unskalierten Flächenraum; `transform` beschreibt die
/// Zoom-Transformation, die der Host auf die gesamte Fläche anwendet.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    pub transform: ViewTransform,
    /// Flächengröße in Pixeln
    pub size: Vec2,
}

impl DrawList {
    /// Erstellt eine leere Liste für eine Fläche.
    pub fn new(size: Vec2, transform: ViewTransform) -> Self {
        Self {
            commands: Vec::new(),
            transform,
            size,
        }
    }

    /// Hängt einen Befehl an.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Zählt Befehle, auf die das Prädikat zutrifft (für Tests und Diagnose).
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }
}

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die Flächengröße und das Größenprofil, die jeder Sub-Renderer
/// pro Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// Flächengröße in Pixeln
    pub surface_size: Vec2,
    /// Größenprofil (Linienstärken, Radien)
    pub scale: &'a ScaleProfile,
    /// Editor-Optionen (Farben)
    pub options: &'a EditorOptions,
    /// Bearbeitungsmodus aktiv
    pub editing: bool,
}
