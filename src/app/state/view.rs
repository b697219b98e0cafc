use crate::core::{Surface, ViewTransform};
use crate::shared::DisplayToggles;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Zoom-Transformation der Zeichenfläche
    pub transform: ViewTransform,
    /// Pixel- und Layout-Größe der Zeichenfläche
    pub surface: Surface,
    /// Sichtbarkeit von Kurven und Keypoints
    pub toggles: DisplayToggles,
    /// Ersatz-Basisbild angekündigt, aber noch nicht gezeichnet
    pub base_image_pending: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::new(),
            surface: Surface::default(),
            toggles: DisplayToggles::default(),
            base_image_pending: false,
        }
    }
}
