//! Application State: zentrale Datenhaltung.

mod app_state;
mod interaction;
mod ui;
mod view;

pub use app_state::AppState;
pub use interaction::{EditorTool, InteractionPhase, InteractionState};
pub use ui::{format_confidence, PredictionSource, StatusKind, StatusMessage, UiState};
pub use view::ViewState;
