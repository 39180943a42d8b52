//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::TimerError,
    state::AppState,
    tasks::TimerAction,
};
use super::responses::{ApiResponse, ErrorResponse, HealthResponse, ModeEntry, StatusResponse};

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(e: TimerError) -> HandlerError {
    let status = match e {
        TimerError::UnknownMode(_) => StatusCode::NOT_FOUND,
        TimerError::DriverStopped => StatusCode::SERVICE_UNAVAILABLE,
        TimerError::InvalidModeConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

async fn run(
    state: &AppState,
    action: TimerAction,
    message: &str,
) -> Result<Json<ApiResponse>, HandlerError> {
    match state.dispatch(action).await {
        Ok(timer) => {
            info!("{} - phase={:?}, remaining={}s", message, timer.phase, timer.remaining_seconds);
            Ok(Json(ApiResponse::from_timer(message.to_string(), timer)))
        }
        Err(e @ TimerError::UnknownMode(_)) => {
            warn!("Rejected request: {}", e);
            Err(error_response(e))
        }
        Err(e) => {
            error!("Timer command failed: {}", e);
            Err(error_response(e))
        }
    }
}

/// Handle POST /start - Start or resume the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, HandlerError> {
    run(&state, TimerAction::Start, "Start requested").await
}

/// Handle POST /pause - Pause the countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, HandlerError> {
    run(&state, TimerAction::Pause, "Pause requested").await
}

/// Handle POST /reset - Re-arm the active mode
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, HandlerError> {
    run(&state, TimerAction::Reset, "Timer reset").await
}

/// Handle POST /mode/:mode_id - Switch to another mode
pub async fn mode_handler(
    State(state): State<Arc<AppState>>,
    Path(mode_id): Path<String>,
) -> Result<Json<ApiResponse>, HandlerError> {
    let message = format!("Switched to mode {}", mode_id);
    run(&state, TimerAction::SwitchMode(mode_id), &message).await
}

/// Handle GET /status - Return timer state and rendered view
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, HandlerError> {
    let timer = match state.dispatch(TimerAction::Snapshot).await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(error_response(e));
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        view: state.get_view(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /modes - List configured modes
pub async fn modes_handler(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ModeEntry>>, HandlerError> {
    let timer = state
        .dispatch(TimerAction::Snapshot)
        .await
        .map_err(error_response)?;

    Ok(Json(
        state
            .modes
            .iter()
            .map(|mode| ModeEntry {
                active: mode.id == timer.active_mode.id,
                mode: mode.clone(),
            })
            .collect(),
    ))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
