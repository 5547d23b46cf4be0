use axum::{
    routing::{get, post},
    Router,
};

use super::handler::{get_config, randomize, update_config, AppState};

/// Build the service router.
///
/// `/randomize` only accepts POST; axum answers any other verb on the path
/// with 405 Method Not Allowed.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/randomize", post(randomize))
        .route("/config", get(get_config).post(update_config))
        .with_state(state)
}
