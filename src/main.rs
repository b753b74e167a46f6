use std::sync::Arc;

use todo_manager::{
    routes::create_router,
    state::{AppState, Config},
    storage::JsonStore,
    task::{TaskRepository, TaskService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_manager=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env());

    tracing::info!("Opening task file {}", config.tasks_file.display());
    let store = JsonStore::init(&config.tasks_file).await?;

    let task_repository = TaskRepository::new(store);
    let task_service = TaskService::new(task_repository);

    let state = AppState {
        config: config.clone(),
        task_service,
    };

    let app = create_router(state);

    let addr = config.addr();
    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
