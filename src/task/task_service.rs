use crate::error::{AppError, Result};
use crate::task::task_dto::{CreateTaskRequest, TaskQuery, UpdateTaskRequest};
use crate::task::task_models::Task;
use crate::task::task_repository::TaskRepository;
use uuid::Uuid;

/// Service layer for task‑related business logic.
#[derive(Clone)]
pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    pub async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        let tasks = self.repo.find_all().await?;
        Ok(tasks.into_iter().filter(|task| query.matches(task)).collect())
    }

    pub async fn get_task(&self, task_id: Uuid) -> Result<Task> {
        self.repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn create_task(&self, payload: CreateTaskRequest) -> Result<Task> {
        let task = self.repo.create(payload).await?;
        tracing::debug!(task_id = %task.id, "Task created");
        Ok(task)
    }

    pub async fn update_task(&self, task_id: Uuid, payload: UpdateTaskRequest) -> Result<Task> {
        self.repo
            .update(task_id, payload)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Deleting an unknown id is not an error.
    pub async fn delete_task(&self, task_id: Uuid) -> Result<()> {
        if !self.repo.delete(task_id).await? {
            tracing::debug!(task_id = %task_id, "Delete requested for unknown task");
        }
        Ok(())
    }
}
