use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::task_models::{Task, TaskFilter};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl From<&Task> for CreateTaskRequest {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: Some(task.description.clone()),
            due_date: task.due_date,
            completed: Some(task.completed),
        }
    }
}

/// Shallow patch: absent fields leave the stored value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

impl From<&Task> for UpdateTaskRequest {
    fn from(task: &Task) -> Self {
        Self {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            due_date: task.due_date,
            completed: Some(task.completed),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TaskQuery {
    /// all, active or completed
    #[param(value_type = Option<String>)]
    pub status: Option<TaskFilter>,
    /// Case-insensitive text matched against title and description
    pub search: Option<String>,
}

impl TaskQuery {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.unwrap_or_default().matches(task)
            && task.matches_search(self.search.as_deref().unwrap_or(""))
    }
}
