use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, patch},
};
use db::models::task::{CreateTask, Task, UpdateTask};
use serde::Deserialize;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// How many uncompleted tasks the dashboard shows at once.
pub const LATEST_TASK_COUNT: u64 = 5;

/// Raw creation payload. Both fields are optional so that missing and
/// blank values produce the same validation message instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn get_tasks(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Task>>>, ApiError> {
    let tasks = Task::find_latest_uncompleted(&state.db().pool, LATEST_TASK_COUNT).await?;

    Ok(ResponseJson(ApiResponse::success(
        tasks,
        "Tasks retrieved successfully",
    )))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, ResponseJson<ApiResponse<Task>>), ApiError> {
    let title = match payload.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => title,
        _ => return Err("Title is required".into()),
    };
    let description = match payload.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => description,
        _ => return Err("Description is required".into()),
    };

    tracing::debug!("Creating task '{}'", title);

    let task = Task::create(
        &state.db().pool,
        &CreateTask {
            title: title.to_string(),
            description: description.to_string(),
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        ResponseJson(ApiResponse::success(task, "Task created successfully")),
    ))
}

pub async fn complete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<ResponseJson<ApiResponse<Task>>, ApiError> {
    let id = task_id
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Invalid task id".to_string()))?;

    let task = Task::find_by_id(&state.db().pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Task with id {id} not found")))?;

    if task.is_completed {
        return Err(ApiError::BadRequest(format!(
            "Task with id {id} is already completed"
        )));
    }

    let updated_task = Task::update(
        &state.db().pool,
        id,
        &UpdateTask {
            is_completed: Some(true),
            ..Default::default()
        },
    )
    .await?;

    tracing::debug!("Completed task {}", id);

    Ok(ResponseJson(ApiResponse::success(
        updated_task,
        "Task completed successfully",
    )))
}

pub fn router() -> Router<AppState> {
    let inner = Router::new()
        .route("/", get(get_tasks).post(create_task))
        .route("/{task_id}/complete", patch(complete_task));

    Router::new().nest("/tasks", inner)
}
