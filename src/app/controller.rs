//! Application Controller für zentrale Event-Verarbeitung.

use super::{render_scene, use_cases};
use super::{AppCommand, AppIntent, AppState};
use crate::core::{ExportSnapshot, InterpretationRequest};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den AppState.
///
/// Alle Mutationen laufen synchron über diesen Controller; der Zustand hat
/// genau einen Besitzer.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die aktuellen Handler sind infallibel: fehlerhafte Vorhersagen und
    /// Interpretationen werden als Statusmeldung im State abgelegt. Die
    /// `Result`-Signatur bleibt die gemeinsame Grenze für Hosts und künftige
    /// fallible Commands.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Vorhersage & Sitzung ===
            AppCommand::ApplyPrediction { result, source } => {
                handlers::session::apply_prediction(state, *result, source)
            }
            AppCommand::ReportPredictionFailure { message, time_ms } => {
                handlers::session::report_prediction_failure(state, message, time_ms)
            }
            AppCommand::ClearSession => handlers::session::clear(state),
            AppCommand::SetInterpretation { result } => {
                handlers::session::set_interpretation(state, result)
            }
            AppCommand::ReportInterpretationFailure { message } => {
                handlers::session::report_interpretation_failure(state, message)
            }

            // === Zeichenfläche & Zoom ===
            AppCommand::MarkBaseImageReady => handlers::view::mark_base_image_ready(state),
            AppCommand::SetSurfaceSize { size, client_size } => {
                handlers::view::set_surface_size(state, size, client_size)
            }
            AppCommand::SetCurveVisibility { curve, visible } => {
                handlers::view::set_curve_visibility(state, curve, visible)
            }
            AppCommand::SetKeypointsVisibility { visible } => {
                handlers::view::set_keypoints_visibility(state, visible)
            }
            AppCommand::ZoomAt { factor, surface_px } => {
                handlers::view::zoom_at(state, factor, surface_px)
            }
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === Interaktion ===
            AppCommand::SetEditingEnabled { enabled } => {
                handlers::interaction::set_editing_enabled(state, enabled)
            }
            AppCommand::SetEditorTool { tool } => handlers::interaction::set_tool(state, tool),
            AppCommand::SetActiveCurve { curve } => {
                handlers::interaction::set_active_curve(state, curve)
            }
            AppCommand::UpdateHover {
                surface_px,
                max_distance,
            } => handlers::interaction::update_hover(state, surface_px, max_distance),
            AppCommand::ClearHover => handlers::interaction::clear_hover(state),

            // === Editing ===
            AppCommand::InsertPoint { curve, surface_px } => {
                handlers::editing::insert_point(state, curve, surface_px)
            }
            AppCommand::ErasePointAt {
                surface_px,
                max_distance,
            } => handlers::editing::erase_point(state, surface_px, max_distance),
            AppCommand::BeginDrag {
                surface_px,
                max_distance,
            } => handlers::editing::begin_drag(state, surface_px, max_distance),
            AppCommand::DragTo { surface_px } => handlers::editing::drag_to(state, surface_px),
            AppCommand::EndDrag => handlers::editing::end_drag(state),
            AppCommand::ResetCurve { curve } => handlers::editing::reset_curve(state, curve),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
        }

        Ok(())
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }

    /// Export-Snapshot des aktuellen (ggf. bearbeiteten) Kurvensatzes.
    pub fn export_snapshot(&self, state: &AppState) -> Option<ExportSnapshot> {
        use_cases::export::build_snapshot(state)
    }

    /// Anfrage-Payload für den Interpretations-Service.
    pub fn interpretation_request(&self, state: &AppState) -> Option<InterpretationRequest> {
        use_cases::interpretation::build_request(state)
    }
}
