use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::Result,
    extract::{JsonBody, PathParam, QueryParams},
    state::AppState,
};
use super::{
    task_dto::{CreateTaskRequest, TaskQuery, UpdateTaskRequest},
    task_models::Task,
};

/// List tasks in storage order
#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskQuery),
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 500, description = "Task file unreadable")
    ),
    tag = "tasks"
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<TaskQuery>,
) -> Result<Json<Vec<Task>>> {
    let tasks = state.task_service.list_tasks(&query).await?;
    Ok(Json(tasks))
}

/// Get a single task by ID
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, description = "Malformed task ID"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn get_task(
    State(state): State<AppState>,
    PathParam(task_id): PathParam<Uuid>,
) -> Result<Json<Task>> {
    let task = state.task_service.get_task(task_id).await?;
    Ok(Json(task))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Malformed body or validation error"),
        (status = 500, description = "Task file unwritable")
    ),
    tag = "tasks"
)]
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTaskRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let task = state.task_service.create_task(payload).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Merge the given fields into a task
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Malformed ID, body or validation error"),
        (status = 404, description = "Task not found")
    ),
    tag = "tasks"
)]
pub async fn update_task(
    State(state): State<AppState>,
    PathParam(task_id): PathParam<Uuid>,
    JsonBody(payload): JsonBody<UpdateTaskRequest>,
) -> Result<Json<Task>> {
    payload.validate()?;

    let task = state.task_service.update_task(task_id, payload).await?;

    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted or already absent"),
        (status = 400, description = "Malformed task ID")
    ),
    tag = "tasks"
)]
pub async fn delete_task(
    State(state): State<AppState>,
    PathParam(task_id): PathParam<Uuid>,
) -> Result<StatusCode> {
    state.task_service.delete_task(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
