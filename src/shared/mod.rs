//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod display_toggles;
pub mod options;
mod render_scene;
mod scale_profile;

pub use display_toggles::DisplayToggles;
pub use options::EditorOptions;
pub use render_scene::RenderScene;
pub use scale_profile::ScaleProfile;
