// Tauri IPC Commands
use serde::Serialize;
use tauri::State;

use crate::config::PipelineConfig;
use crate::pipeline;
use crate::render::{self, Scene};

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl<E: std::fmt::Display> From<E> for CommandError {
    fn from(error: E) -> Self {
        CommandError {
            message: error.to_string(),
        }
    }
}

type CommandResult<T> = Result<T, CommandError>;

/// Startup analysis shown when the window opens
/// Never mutated after setup
pub struct AnalysisState {
    pub config: PipelineConfig,
    pub scene: Scene,
}

#[tauri::command]
pub fn get_scene(state: State<'_, AnalysisState>) -> Scene {
    state.scene.clone()
}

/// Analyze another file with the startup parameters
#[tauri::command]
pub fn analyze_file(state: State<'_, AnalysisState>, path: String) -> CommandResult<Scene> {
    let config = state.config.with_input_path(path);

    let analysis = pipeline::analyze(&config).map_err(|e| {
        log::error!("Analysis of {} failed: {}", config.input_path.display(), e);
        CommandError::from(e)
    })?;

    Ok(render::build_scene(&analysis.features, &config.render_settings()))
}
