//! Task endpoints
//!
//! The HTTP boundary over the task store: filtered listing, create,
//! update, toggle completion, delete. The store treats unknown ids as
//! silent no-ops; this layer maps them to 404 so the frontend can
//! react.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use td_core::task::{DraftField, Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus};
use td_core::view::{self, FilterState, TaskCounts};
use td_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskListResponse {
    tasks: Vec<Task>,
    counts: TaskCounts,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTaskRequest {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    priority: Option<TaskPriority>,
    #[serde(default)]
    status: Option<TaskStatus>,
    /// A date string sets the deadline, an empty string clears it,
    /// absence leaves it untouched
    #[serde(default)]
    due_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DraftField>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: Vec::new(),
        }
    }
}

fn map_error(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        Error::Validation(err) => {
            let error = err.to_string();
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error,
                    fields: err.fields,
                }),
            )
        }
        err => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(err.to_string())),
        ),
    }
}

fn not_found(id: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("Task {} not found", id))),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - Derived view plus counts over the full list
async fn list_tasks(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Json<TaskListResponse> {
    let store = state.store().read().await;
    let tasks = view::derive_view(store.tasks(), &filter)
        .into_iter()
        .cloned()
        .collect();

    Json(TaskListResponse {
        tasks,
        counts: store.counts(),
    })
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<ErrorResponse>)> {
    let mut store = state.store().write().await;
    match store.add(draft) {
        Ok(task) => Ok((StatusCode::CREATED, Json(task))),
        Err(err) => Err(map_error(err)),
    }
}

/// GET /api/tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store().read().await;
    match store.get(&id) {
        Some(task) => Ok(Json(task.clone())),
        None => Err(not_found(&id)),
    }
}

/// PATCH /api/tasks/:id - Update a task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let due_date = match req.due_date.as_deref() {
        None => None,
        Some("") => Some(None),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(Some(date)),
            Err(_) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Invalid due date: {}", raw))),
                ))
            }
        },
    };

    let patch = TaskPatch {
        title: req.title,
        description: req.description,
        priority: req.priority,
        status: req.status,
        due_date,
    };

    let mut store = state.store().write().await;
    match store.update(&id, patch) {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(not_found(&id)),
        Err(err) => Err(map_error(err)),
    }
}

/// POST /api/tasks/:id/toggle - Flip between completed and pending
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let mut store = state.store().write().await;
    match store.toggle_completion(&id) {
        Some(task) => Ok(Json(task)),
        None => Err(not_found(&id)),
    }
}

/// DELETE /api/tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let mut store = state.store().write().await;
    if store.delete(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&id))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/toggle", post(toggle_task))
}
