use super::{
    api::TaskApi,
    error::ClientError,
    preferences::Preferences,
    state::{TaskAction, TaskState},
};
use crate::task::{CreateTaskRequest, UpdateTaskRequest};

/// Owns the client state and keeps it in step with the server.
///
/// Domain actions are sent to the server first; the local transition is applied
/// only once the server confirms it. A failed call is logged and returned, and
/// the state is left exactly as it was.
pub struct TaskContext<A> {
    state: TaskState,
    api: A,
    preferences: Preferences,
}

impl<A: TaskApi> TaskContext<A> {
    pub fn new(api: A, preferences: Preferences) -> Self {
        Self {
            state: TaskState::default(),
            api,
            preferences,
        }
    }

    pub fn state(&self) -> &TaskState {
        &self.state
    }

    /// Restores the saved theme and fetches the task list.
    ///
    /// Both steps run even if the other fails; the first error is returned.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let theme = self
            .preferences
            .dark_mode()
            .await
            .inspect_err(|e| tracing::error!("Error reading preferences: {}", e));
        if let Ok(dark_mode) = theme {
            if dark_mode != self.state.dark_mode {
                self.state.apply(TaskAction::ToggleDarkMode);
            }
        }

        let tasks = self
            .api
            .list_tasks()
            .await
            .inspect_err(|e| tracing::error!("Error loading tasks: {}", e))?;
        self.state.apply(TaskAction::LoadTasks(tasks));

        theme.map(|_| ())
    }

    pub async fn dispatch(&mut self, action: TaskAction) -> Result<(), ClientError> {
        match action {
            TaskAction::AddTask(task) => {
                let created = self
                    .api
                    .create_task(CreateTaskRequest::from(&task))
                    .await
                    .inspect_err(|e| tracing::error!("Error adding task: {}", e))?;
                self.state.apply(TaskAction::AddTask(created));
            }
            TaskAction::UpdateTask(task) => {
                let updated = self
                    .api
                    .update_task(task.id, UpdateTaskRequest::from(&task))
                    .await
                    .inspect_err(|e| tracing::error!("Error updating task {}: {}", task.id, e))?;
                self.state.apply(TaskAction::UpdateTask(updated));
            }
            TaskAction::DeleteTask(id) => {
                self.api
                    .delete_task(id)
                    .await
                    .inspect_err(|e| tracing::error!("Error deleting task {}: {}", id, e))?;
                self.state.apply(TaskAction::DeleteTask(id));
            }
            TaskAction::ToggleDarkMode => {
                self.preferences
                    .set_dark_mode(!self.state.dark_mode)
                    .await
                    .inspect_err(|e| tracing::error!("Error saving theme: {}", e))?;
                self.state.apply(TaskAction::ToggleDarkMode);
            }
            local => self.state.apply(local),
        }
        Ok(())
    }
}
