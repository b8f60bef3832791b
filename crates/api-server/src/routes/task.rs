//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use air_core::task::{Task, TaskInput};
use air_core::Error;

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TaskMessageResponse {
    pub message: String,
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Ids that do not parse cannot name a stored task
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        debug!("Rejecting malformed task id {:?}", raw);
        ApiError::not_found()
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state
        .task_store()
        .find_all()
        .await
        .map_err(|e| ApiError::from_core("Error fetching tasks", e))?;

    Ok(Json(tasks))
}

/// GET /tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&id)?;
    let task = state
        .task_store()
        .find_by_id(id)
        .await
        .and_then(|task| task.ok_or_else(|| Error::TaskNotFound(id.to_string())))
        .map_err(|e| ApiError::from_core("Error fetching task", e))?;

    Ok(Json(task))
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<TaskInput>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskMessageResponse>), ApiError> {
    let Json(input) = body?;
    let new_task = input
        .into_new_task()
        .map_err(|e| ApiError::from_core("Error creating task", e.into()))?;

    let created = state
        .task_store()
        .insert(new_task)
        .await
        .map_err(|e| ApiError::from_core("Error creating task", e))?;

    info!("Created task {} ({:?})", created.id, created.title);

    Ok((
        StatusCode::CREATED,
        Json(TaskMessageResponse {
            message: "Task created successfully".to_string(),
            task: created,
        }),
    ))
}

/// PUT /tasks/:id - Update the supplied fields of a task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TaskInput>, JsonRejection>,
) -> Result<Json<TaskMessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = body?;
    let patch = input
        .into_patch()
        .map_err(|e| ApiError::from_core("Error updating task", e.into()))?;

    let updated = state
        .task_store()
        .update_by_id(id, patch)
        .await
        .and_then(|task| task.ok_or_else(|| Error::TaskNotFound(id.to_string())))
        .map_err(|e| ApiError::from_core("Error updating task", e))?;

    info!("Updated task {}", updated.id);

    Ok(Json(TaskMessageResponse {
        message: "Task updated successfully".to_string(),
        task: updated,
    }))
}

/// DELETE /tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let deleted = state
        .task_store()
        .delete_by_id(id)
        .await
        .and_then(|task| task.ok_or_else(|| Error::TaskNotFound(id.to_string())))
        .map_err(|e| ApiError::from_core("Error deleting task", e))?;

    info!("Deleted task {}", deleted.id);

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
