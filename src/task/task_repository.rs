use uuid::Uuid;

use crate::error::Result;
use crate::storage::JsonStore;

use super::task_dto::{CreateTaskRequest, UpdateTaskRequest};
use super::task_models::Task;

#[derive(Clone)]
pub struct TaskRepository {
    store: JsonStore,
}

impl TaskRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Task>> {
        self.store.read_all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let tasks: Vec<Task> = self.store.read_all().await?;
        Ok(tasks.into_iter().find(|task| task.id == id))
    }

    pub async fn create(&self, payload: CreateTaskRequest) -> Result<Task> {
        let _guard = self.store.lock().await;
        let mut tasks: Vec<Task> = self.store.read_all().await?;

        let mut task = Task::new(
            payload.title,
            payload.description.unwrap_or_default(),
            payload.due_date,
        );
        task.completed = payload.completed.unwrap_or(false);

        tasks.push(task.clone());
        self.store.write_all(&tasks).await?;

        Ok(task)
    }

    /// Returns `None` without touching the file when no task has this id.
    pub async fn update(&self, id: Uuid, changes: UpdateTaskRequest) -> Result<Option<Task>> {
        let _guard = self.store.lock().await;
        let mut tasks: Vec<Task> = self.store.read_all().await?;

        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        changes.apply(task);
        let updated = task.clone();

        self.store.write_all(&tasks).await?;
        Ok(Some(updated))
    }

    /// Returns whether a task was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let _guard = self.store.lock().await;
        let mut tasks: Vec<Task> = self.store.read_all().await?;

        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Ok(false);
        }

        self.store.write_all(&tasks).await?;
        Ok(true)
    }
}
