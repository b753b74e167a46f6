use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// A fresh, not yet completed task stamped with a new id and the current time.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            due_date,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match on title or description. An empty query matches.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    /// Translation key of the filter's label.
    pub fn key(self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: &str, completed: bool) -> Task {
        let mut task = Task::new(title, description, None);
        task.completed = completed;
        task
    }

    #[test]
    fn test_task_filter_display() {
        assert_eq!(TaskFilter::All.to_string(), "all");
        assert_eq!(TaskFilter::Active.to_string(), "active");
        assert_eq!(TaskFilter::Completed.to_string(), "completed");
    }

    #[test]
    fn test_task_filter_from_str() {
        assert_eq!("Active".parse::<TaskFilter>(), Ok(TaskFilter::Active));
        assert_eq!("completed".parse::<TaskFilter>(), Ok(TaskFilter::Completed));
        assert!("done".parse::<TaskFilter>().is_err());
    }

    #[test]
    fn test_filters_split_on_completion() {
        let open = task("open", "", false);
        let done = task("done", "", true);

        assert!(TaskFilter::All.matches(&open) && TaskFilter::All.matches(&done));
        assert!(TaskFilter::Active.matches(&open));
        assert!(!TaskFilter::Active.matches(&done));
        assert!(TaskFilter::Completed.matches(&done));
        assert!(!TaskFilter::Completed.matches(&open));
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_description() {
        let t = task("Buy Milk", "from the Corner shop", false);

        assert!(t.matches_search(""));
        assert!(t.matches_search("milk"));
        assert!(t.matches_search("CORNER"));
        assert!(!t.matches_search("bread"));
    }

    #[test]
    fn test_task_serializes_with_camel_case_keys() {
        let mut t = Task::new("Buy milk", "", NaiveDate::from_ymd_opt(2024, 1, 1));
        t.completed = true;

        let value = serde_json::to_value(&t).unwrap();

        assert_eq!(value["dueDate"], "2024-01-01");
        assert_eq!(value["completed"], true);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("due_date").is_none());
    }

    #[test]
    fn test_task_missing_optional_fields_default() {
        let json = r#"{
            "id": "0b8f6b4e-8a9e-4b4c-9d55-3f4f6f1c2a10",
            "title": "Water plants",
            "createdAt": "2024-01-01T10:00:00Z"
        }"#;

        let t: Task = serde_json::from_str(json).unwrap();

        assert_eq!(t.description, "");
        assert_eq!(t.due_date, None);
        assert!(!t.completed);
    }
}
