use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::draw_engine::{draw_teams, Config, ConfigError, Team};

// ---------------------------------------------------------------------------
// Shared state: where the draw configuration lives on disk
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub config_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        AppState { config_path: Arc::new(config_path.into()) }
    }
}

type HandlerError = (StatusCode, String);

fn server_error(message: impl Into<String>) -> HandlerError {
    (StatusCode::INTERNAL_SERVER_ERROR, message.into())
}

// ---------------------------------------------------------------------------
// POST /randomize
// ---------------------------------------------------------------------------

/// Load the configuration and run one draw.
///
/// The draw shuffles with short sleeps between steps, so it runs on a
/// blocking task rather than on the async executor.
pub async fn randomize(State(state): State<AppState>) -> Result<Json<Vec<Team>>, HandlerError> {
    info!("received draw request");

    let path = Arc::clone(&state.config_path);
    let outcome = tokio::task::spawn_blocking(move || -> Result<Vec<Team>, ConfigError> {
        let config = Config::load(path.as_path())?;
        Ok(draw_teams(config))
    })
    .await;

    let teams = match outcome {
        Ok(Ok(teams)) => teams,
        Ok(Err(err)) => {
            error!(%err, "error loading configuration");
            return Err(server_error(format!("Failed to load configuration: {err}")));
        }
        Err(err) => {
            error!(%err, "draw task failed");
            return Err(server_error("Drawing process failed"));
        }
    };

    info!(teams = teams.len(), "draw completed");
    Ok(Json(teams))
}

// ---------------------------------------------------------------------------
// GET /config — current configuration file
// ---------------------------------------------------------------------------

pub async fn get_config(State(state): State<AppState>) -> Result<Json<Config>, HandlerError> {
    match Config::load(state.config_path.as_path()) {
        Ok(config) => Ok(Json(config)),
        Err(err) => {
            error!(%err, "error reading configuration");
            Err(server_error(format!("Failed to read configuration: {err}")))
        }
    }
}

// ---------------------------------------------------------------------------
// POST /config — replace the configuration file
// ---------------------------------------------------------------------------

/// Rewrite the configuration file with a validated body.
///
/// The body must already deserialize as [`Config`]; this additionally rejects
/// a non-positive team count before anything touches the disk.
pub async fn update_config(
    State(state): State<AppState>,
    Json(new_config): Json<Config>,
) -> Result<Json<Value>, HandlerError> {
    if let Err(err) = new_config.validate() {
        return Err(server_error(format!("Invalid configuration: {err}")));
    }

    let pretty = serde_json::to_vec_pretty(&new_config)
        .map_err(|err| server_error(format!("Failed to serialize configuration: {err}")))?;

    if let Err(err) = tokio::fs::write(state.config_path.as_path(), pretty).await {
        error!(%err, "error writing configuration");
        return Err(server_error(format!("Failed to write configuration: {err}")));
    }

    info!("configuration updated");
    Ok(Json(json!({ "success": true, "message": "Config updated successfully." })))
}
