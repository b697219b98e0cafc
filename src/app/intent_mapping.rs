//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier werden rohe Pointer-Positionen über Layout-Skalierung und
//! Zoom-Inversion in unskalierte Flächenpixel übersetzt und je nach
//! Interaktionsphase und Werkzeug an die passenden Commands verteilt.

use super::state::{EditorTool, InteractionPhase, PredictionSource};
use super::{AppCommand, AppIntent, AppState};
use glam::Vec2;

/// Rohe Pointer-Position → gezoomtes Bildschirmpixel in Flächenauflösung.
fn screen_px(state: &AppState, raw: Vec2) -> Vec2 {
    state.view.surface.raw_to_screen(raw)
}

/// Rohe Pointer-Position → unskaliertes Flächenpixel.
fn surface_px(state: &AppState, raw: Vec2) -> Vec2 {
    let surface = &state.view.surface;
    state
        .view
        .transform
        .to_surface(screen_px(state, raw), surface.size)
}

/// Pointer-Eingaben wirken nur auf eine Fläche mit Ausdehnung und mit endlicher Position.
fn accepts_pointer(state: &AppState, raw: Vec2) -> bool {
    state.curves.is_some() && state.view.surface.has_area() && raw.is_finite()
}

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let phase = state.interaction.phase();

    match intent {
        AppIntent::PredictionReceived { result } => vec![AppCommand::ApplyPrediction {
            result,
            source: PredictionSource::Backend,
        }],
        AppIntent::PredictionFailed { message, time_ms } => {
            vec![AppCommand::ReportPredictionFailure { message, time_ms }]
        }
        AppIntent::DemoRequested => vec![AppCommand::ApplyPrediction {
            result: Box::new(crate::core::PredictionResult::demo()),
            source: PredictionSource::Demo,
        }],
        AppIntent::ResetRequested => vec![AppCommand::ClearSession],
        AppIntent::BaseImageReady => vec![AppCommand::MarkBaseImageReady],
        AppIntent::SurfaceResized { size, client_size } => {
            vec![AppCommand::SetSurfaceSize { size, client_size }]
        }
        AppIntent::EditingToggled { enabled } => vec![AppCommand::SetEditingEnabled { enabled }],
        AppIntent::ToolSelected { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::ActiveCurveSelected { curve } => vec![AppCommand::SetActiveCurve { curve }],
        AppIntent::CurveVisibilityChanged { curve, visible } => {
            vec![AppCommand::SetCurveVisibility { curve, visible }]
        }
        AppIntent::KeypointsVisibilityChanged { visible } => {
            vec![AppCommand::SetKeypointsVisibility { visible }]
        }

        AppIntent::PointerDown { pos } => {
            if phase != InteractionPhase::EditingIdle || !accepts_pointer(state, pos) {
                return vec![];
            }
            let surface_px = surface_px(state, pos);
            let max_distance = state.scale_profile().hit_radius(true);
            match state.interaction.tool {
                EditorTool::Add => vec![AppCommand::InsertPoint {
                    curve: state.interaction.active_curve,
                    surface_px,
                }],
                EditorTool::Erase => vec![AppCommand::ErasePointAt {
                    surface_px,
                    max_distance,
                }],
                EditorTool::Drag => vec![AppCommand::BeginDrag {
                    surface_px,
                    max_distance,
                }],
            }
        }
        AppIntent::PointerMoved { pos } => {
            if !accepts_pointer(state, pos) {
                return vec![];
            }
            let surface_px = surface_px(state, pos);
            match phase {
                InteractionPhase::Dragging => vec![AppCommand::DragTo { surface_px }],
                InteractionPhase::EditingIdle | InteractionPhase::Idle => {
                    vec![AppCommand::UpdateHover {
                        surface_px,
                        max_distance: state
                            .scale_profile()
                            .hit_radius(phase == InteractionPhase::EditingIdle),
                    }]
                }
            }
        }
        AppIntent::PointerUp => match phase {
            InteractionPhase::Dragging => vec![AppCommand::EndDrag],
            _ => vec![],
        },
        AppIntent::PointerLeft => match phase {
            InteractionPhase::Dragging => vec![AppCommand::EndDrag, AppCommand::ClearHover],
            _ => vec![AppCommand::ClearHover],
        },

        AppIntent::Wheel { pos, delta_y } => {
            if !state.interaction.editing_enabled
                || delta_y == 0.0
                || !delta_y.is_finite()
                || !pos.is_finite()
            {
                return vec![];
            }
            let step = state.options.wheel_zoom_step;
            let factor = if delta_y < 0.0 { step } else { 1.0 / step };
            vec![AppCommand::ZoomAt {
                factor,
                surface_px: surface_px(state, pos),
            }]
        }
        AppIntent::ZoomInRequested if state.interaction.editing_enabled => {
            vec![AppCommand::ZoomIn]
        }
        AppIntent::ZoomOutRequested if state.interaction.editing_enabled => {
            vec![AppCommand::ZoomOut]
        }
        AppIntent::ZoomInRequested | AppIntent::ZoomOutRequested => vec![],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::ResetActiveCurveRequested => vec![AppCommand::ResetCurve {
            curve: state.interaction.active_curve,
        }],
        AppIntent::InterpretationReceived { result } => {
            vec![AppCommand::SetInterpretation { result }]
        }
        AppIntent::InterpretationFailed { message } => {
            vec![AppCommand::ReportInterpretationFailure { message }]
        }
    }
}
