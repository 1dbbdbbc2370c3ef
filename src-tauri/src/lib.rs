// Vowel Triangle - difference-feature scatter plot of a WAV recording
// Module declarations

use std::process::ExitCode;

pub mod analysis;
pub mod audio;
#[cfg(feature = "desktop")]
mod commands;
pub mod config;
pub mod pipeline;
pub mod render;

use crate::render::Scene;

/// Run the configured analysis and lay out its scene
/// Any failure here ends the program before anything is drawn
fn prepare() -> Result<(config::PipelineConfig, Scene), pipeline::PipelineError> {
    let (config, analysis) = pipeline::load_and_analyze()?;
    log::info!(
        "Analyzed {} samples into {} feature pairs",
        analysis.sample_count,
        analysis.features.len()
    );
    let scene = render::build_scene(&analysis.features, &config.render_settings());
    Ok((config, scene))
}

#[cfg(feature = "desktop")]
pub fn run() -> ExitCode {
    use tauri::{Manager, WebviewUrl, WebviewWindowBuilder};
    use tauri_plugin_log::{Target, TargetKind};

    let result = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::default()
                .clear_targets()
                .target(Target::new(TargetKind::Stdout))
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Aborts the builder before any window exists
            let (config, scene) = prepare().map_err(|e| {
                log::error!("Analysis failed: {}", e);
                e
            })?;

            WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                .title(&scene.title)
                .inner_size(scene.width as f64, scene.height as f64)
                .build()?;

            app.manage(commands::AnalysisState { config, scene });

            log::info!("Vowel triangle window opened");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_scene,
            commands::analyze_file,
        ])
        .run(tauri::generate_context!());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Error while running tauri application: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Headless build: print the scene as JSON instead of opening a window
#[cfg(not(feature = "desktop"))]
pub fn run() -> ExitCode {
    init_logging();

    let (_, scene) = match prepare() {
        Ok(prepared) => prepared,
        Err(e) => {
            log::error!("Analysis failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&scene) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize scene: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(all(not(feature = "desktop"), feature = "headless"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Built without a logger: diagnostics are dropped, the scene is still printed
#[cfg(all(not(feature = "desktop"), not(feature = "headless")))]
fn init_logging() {}
