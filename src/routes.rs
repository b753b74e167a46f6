use crate::{
    state::AppState,
    task::{self, CreateTaskRequest, Task, TaskFilter, UpdateTaskRequest},
};
use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        task::task_handlers::get_tasks,
        task::task_handlers::get_task,
        task::task_handlers::create_task,
        task::task_handlers::update_task,
        task::task_handlers::delete_task,
    ),
    components(
        schemas(
            Task,
            TaskFilter,
            CreateTaskRequest,
            UpdateTaskRequest,
        )
    ),
    tags(
        (name = "tasks", description = "Task management endpoints")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let task_routes = Router::new()
        .route("/tasks", get(task::get_tasks).post(task::create_task))
        .route(
            "/tasks/:id",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", task_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
