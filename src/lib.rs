//! PalmTrace Editor Library.
//! Overlay-Bearbeitung von Handlinien als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, InteractionPhase, UiState,
    ViewState,
};
pub use core::{
    Curve, CurveId, CurveSet, ExportSnapshot, InterpretationRequest, KeypointId, KeypointSet,
    NormalizedPoint, PointRef, PredictionResult, Roi, Surface, ViewTransform,
};
pub use render::{DrawCommand, DrawList, OverlayRenderer};
pub use shared::{EditorOptions, RenderScene, ScaleProfile};
