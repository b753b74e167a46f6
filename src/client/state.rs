use uuid::Uuid;

use crate::task::{Task, TaskFilter};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskState {
    pub tasks: Vec<Task>,
    pub filter: TaskFilter,
    pub search_query: String,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskAction {
    AddTask(Task),
    UpdateTask(Task),
    DeleteTask(Uuid),
    SetFilter(TaskFilter),
    SetSearch(String),
    ToggleDarkMode,
    LoadTasks(Vec<Task>),
}

impl TaskState {
    pub fn apply(&mut self, action: TaskAction) {
        match action {
            TaskAction::AddTask(task) => self.tasks.push(task),
            TaskAction::UpdateTask(updated) => {
                if let Some(task) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
                    *task = updated;
                }
            }
            TaskAction::DeleteTask(id) => self.tasks.retain(|task| task.id != id),
            TaskAction::SetFilter(filter) => self.filter = filter,
            TaskAction::SetSearch(query) => self.search_query = query,
            TaskAction::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            TaskAction::LoadTasks(tasks) => self.tasks = tasks,
        }
    }

    /// Tasks passing both the active filter and the search text, in stored order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task) && task.matches_search(&self.search_query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, completed: bool) -> Task {
        let mut task = Task::new(title, "", None);
        task.completed = completed;
        task
    }

    fn titles(state: &TaskState) -> Vec<&str> {
        state.visible_tasks().into_iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = TaskState::default();
        assert!(state.tasks.is_empty());
        assert_eq!(state.filter, TaskFilter::All);
        assert_eq!(state.search_query, "");
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_add_update_delete() {
        let mut state = TaskState::default();
        let milk = task("Buy milk", false);
        let bread = task("Buy bread", false);

        state.apply(TaskAction::AddTask(milk.clone()));
        state.apply(TaskAction::AddTask(bread.clone()));

        let mut done = milk.clone();
        done.completed = true;
        state.apply(TaskAction::UpdateTask(done.clone()));
        assert_eq!(state.tasks, vec![done, bread.clone()]);

        state.apply(TaskAction::DeleteTask(milk.id));
        assert_eq!(state.tasks, vec![bread]);
    }

    #[test]
    fn test_update_unknown_task_is_ignored() {
        let mut state = TaskState::default();
        state.apply(TaskAction::AddTask(task("Buy milk", false)));
        let before = state.clone();

        state.apply(TaskAction::UpdateTask(task("Stranger", true)));

        assert_eq!(state, before);
    }

    #[test]
    fn test_load_replaces_tasks_and_toggle_flips_theme() {
        let mut state = TaskState::default();
        state.apply(TaskAction::AddTask(task("old", false)));

        state.apply(TaskAction::LoadTasks(vec![task("new", false)]));
        state.apply(TaskAction::ToggleDarkMode);

        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].title, "new");
        assert!(state.dark_mode);
    }

    #[test]
    fn test_visible_tasks_apply_filter_and_search() {
        let mut state = TaskState::default();
        state.apply(TaskAction::LoadTasks(vec![
            task("Buy milk", false),
            task("Pay MILKMAN", true),
            task("Walk dog", false),
        ]));

        assert_eq!(titles(&state), vec!["Buy milk", "Pay MILKMAN", "Walk dog"]);

        state.apply(TaskAction::SetFilter(TaskFilter::Active));
        assert_eq!(titles(&state), vec!["Buy milk", "Walk dog"]);

        state.apply(TaskAction::SetFilter(TaskFilter::Completed));
        assert_eq!(titles(&state), vec!["Pay MILKMAN"]);

        state.apply(TaskAction::SetFilter(TaskFilter::All));
        state.apply(TaskAction::SetSearch("milk".into()));
        assert_eq!(titles(&state), vec!["Buy milk", "Pay MILKMAN"]);
    }
}
