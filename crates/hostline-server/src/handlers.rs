//! HTTP Handlers

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};

use hostline_core::api::{ChatReply, ChatRequest, ErrorBody, HealthReport, SessionInfo};
use hostline_core::SiteError;

use crate::state::AppState;

/// Longest chat message the demo accepts
pub const MAX_MESSAGE_CHARS: usize = 2000;

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
            code: code.into(),
        }),
    )
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        auth_enabled: state.auth.is_enabled(),
    })
}

/// Chat demo endpoint
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let message = payload.message.trim();

    if message.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "EMPTY_MESSAGE", "Message is empty"));
    }
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "MESSAGE_TOO_LONG",
            format!("Messages are limited to {MAX_MESSAGE_CHARS} characters"),
        ));
    }

    let (intent, reply) = state.receptionist.reply(message);

    let conversation_id = payload
        .conversation_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    Ok(Json(ChatReply {
        message: reply,
        intent,
        conversation_id,
    }))
}

/// Session lookup for the dashboard shell
pub async fn session_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionInfo>, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    let session = state.auth.session(token).await.map_err(|e| {
        tracing::error!(provider = state.auth.name(), "Session lookup failed: {}", e);
        session_error(&e)
    })?;

    Ok(Json(session))
}

fn session_error(err: &SiteError) -> ApiError {
    let (status, code) = match err {
        SiteError::Auth(_) => (StatusCode::UNAUTHORIZED, "AUTH_REJECTED"),
        e if e.is_retryable() => (StatusCode::SERVICE_UNAVAILABLE, "AUTH_UNAVAILABLE"),
        _ => (StatusCode::BAD_GATEWAY, "AUTH_UNAVAILABLE"),
    };
    api_error(status, code, err.user_message())
}
