use std::path::PathBuf;
use std::sync::Arc;

use crate::task::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub task_service: TaskService,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tasks_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("PORT={} is not a valid port, using 3000", raw);
                3000
            }),
            Err(_) => 3000,
        };

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            tasks_file: std::env::var("TASKS_FILE")
                .unwrap_or_else(|_| "tasks.json".to_string())
                .into(),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
