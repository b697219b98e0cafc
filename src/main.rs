//! PalmTrace Editor (Headless).
//!
//! Lädt eine Vorhersage, spielt optional eine aufgezeichnete Sitzung aus
//! `AppIntent`s ab und gibt den Export-Snapshot als JSON aus.

use anyhow::Context;
use clap::Parser;
use palmtrace_editor::app::state::format_confidence;
use palmtrace_editor::{
    render, AppController, AppIntent, AppState, CurveId, EditorOptions, OverlayRenderer,
    PredictionResult,
};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    AppRunner::run(Args::parse())
}

/// Kommandozeilen-Argumente
#[derive(Parser, Debug)]
#[command(name = "palmtrace-editor")]
#[command(version, about = "Handlinien-Overlay headless bearbeiten und exportieren", long_about = None)]
struct Args {
    /// Vorhersage-JSON des Erkennungsdienstes
    #[arg(value_name = "PREDICTION")]
    prediction: PathBuf,

    /// Aufgezeichnete Sitzung (JSON-Liste von Intents)
    #[arg(value_name = "SESSION")]
    session: Option<PathBuf>,

    /// Overlay zusätzlich als SVG schreiben
    #[arg(long, value_name = "FILE")]
    svg: Option<PathBuf>,
}

struct AppRunner;

impl AppRunner {
    fn run(args: Args) -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("PalmTrace Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        let json = std::fs::read_to_string(&args.prediction)
            .with_context(|| format!("Vorhersage nicht lesbar: {}", args.prediction.display()))?;
        let intent = match PredictionResult::from_json(&json) {
            Ok(result) => AppIntent::PredictionReceived {
                result: Box::new(result),
            },
            Err(e) => AppIntent::PredictionFailed {
                message: e.to_string(),
                time_ms: 0.0,
            },
        };
        controller.handle_intent(&mut state, intent)?;

        if let Some(path) = &args.session {
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("Sitzung nicht lesbar: {}", path.display()))?;
            let intents: Vec<AppIntent> = serde_json::from_str(&script)
                .with_context(|| format!("Sitzung ungültig: {}", path.display()))?;
            log::info!("Spiele {} Intents ab", intents.len());
            for intent in intents {
                controller.handle_intent(&mut state, intent)?;
            }
        }

        for status in &state.ui.status {
            log::info!("[{:?}] {}", status.kind, status.text);
        }
        for id in CurveId::ALL {
            let confidence = state.confidences.map(|c| c.get(id));
            log::info!("{}: {}", id.key(), format_confidence(confidence));
        }
        log::info!("Dauer: {}", state.ui.time_label());

        if let Some(path) = &args.svg {
            let scene = controller.build_render_scene(&state);
            let list = OverlayRenderer::new().render_scene(&scene);
            std::fs::write(path, render::svg::to_svg(&list))
                .with_context(|| format!("SVG nicht schreibbar: {}", path.display()))?;
            log::info!("Overlay geschrieben: {}", path.display());
        }

        match controller.export_snapshot(&state) {
            Some(snapshot) => println!("{}", snapshot.to_json_pretty()?),
            None => log::warn!("Kein Kurvensatz geladen, nichts zu exportieren"),
        }

        Ok(())
    }
}
