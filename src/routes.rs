use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::course::{Lesson, PathFilter};
use crate::state::AppState;
use crate::tutor::{ChatMessage, TutorResponse};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // WebSocket
        .route("/client-ws", get(websocket_handler))
        // Health check
        .route("/api/health", get(health_check))
        // REST API routes
        .route("/api/course", get(get_course))
        .route("/api/lessons/:lesson_id", get(get_lesson))
        .route("/api/tutor", post(post_tutor))
        // Frontend bundle, with index.html fallback handled by the SPA router
        .fallback_service(ServeDir::new(&system_config.frontend_dir))
}

async fn websocket_handler(
    ws: axum::extract::ws::WebSocketUpgrade,
    State(state): State<AppState>,
) -> axum::response::Response {
    crate::websocket::websocket_handler(ws, State(state)).await
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "tutor_provider": state.completion_client.provider_name(),
        "active_clients": state.client_contexts.len()
    }))
}

#[derive(Debug, Deserialize)]
struct CourseQuery {
    difficulty: Option<String>,
}

async fn get_course(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let filter = match query.difficulty.as_deref() {
        None => PathFilter::All,
        Some(raw) => PathFilter::parse(raw).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": format!("Unknown difficulty filter: {}", raw)})),
            )
        })?,
    };

    let modules = state.catalog.filter_by_difficulty(filter);
    Ok(Json(json!({ "modules": modules })))
}

async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let (module, lesson) = state.catalog.find_lesson(&lesson_id).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("Lesson not found: {}", lesson_id)})),
        )
    })?;

    let (prev, next) = state.catalog.neighbors(&lesson_id);
    let nav_link = |lesson: Option<&Lesson>| {
        lesson
            .map(|l| json!({ "id": l.id, "title": l.title }))
            .unwrap_or(Value::Null)
    };

    Ok(Json(json!({
        "lesson": lesson,
        "module": {
            "id": module.id,
            "title": module.title,
            "difficulty": module.difficulty
        },
        "prev": nav_link(prev),
        "next": nav_link(next)
    })))
}

#[derive(Debug, Deserialize)]
struct TutorRequest {
    messages: Vec<ChatMessage>,
    system_prompt: Option<String>,
}

async fn post_tutor(
    State(state): State<AppState>,
    Json(request): Json<TutorRequest>,
) -> Result<Json<TutorResponse>, (StatusCode, Json<Value>)> {
    let system = request
        .system_prompt
        .as_deref()
        .unwrap_or(&state.config.tutor_config.persona_prompt);

    let response = state
        .completion_client
        .complete(&request.messages, Some(system))
        .await
        .map_err(|e| {
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": e.to_string()})),
            )
        })?;

    Ok(Json(response))
}
