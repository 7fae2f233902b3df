use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::AppState;

/// Liveness/diagnostic endpoint: database reachability plus process uptime.
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let database_status = match state.db.ping().await {
        Ok(()) => "connected",
        Err(_) => "disconnected",
    };
    let uptime = state.started_at.elapsed().as_secs();

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "All services are up and running!",
        "services": {
            "database": { "status": database_status }
        },
        "server": {
            "uptime": format!("{uptime} seconds"),
            "port": state.config.server_port,
        }
    })))
}
