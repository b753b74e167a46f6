//! Plain-text rendering of the task screen.

use super::state::TaskState;
use crate::i18n::{translate, Language};
use crate::task::{Task, TaskFilter};

pub fn render_navbar(state: &TaskState, language: Language) -> String {
    let theme_hint = if state.dark_mode {
        translate(language, "switchToLight")
    } else {
        translate(language, "switchToDark")
    };
    let language_hint = match language {
        Language::En => translate(language, "switchToSpanish"),
        Language::Es => translate(language, "switchToEnglish"),
    };

    format!(
        "{}  [{}] [{}]",
        translate(language, "taskManager"),
        theme_hint,
        language_hint
    )
}

/// Search box and filter buttons; the selected filter is bracketed.
pub fn render_filters(state: &TaskState, language: Language) -> String {
    let search = if state.search_query.is_empty() {
        translate(language, "searchTasks")
    } else {
        state.search_query.as_str()
    };

    let buttons: Vec<String> = TaskFilter::ALL
        .iter()
        .map(|filter| {
            let label = translate(language, filter.key());
            if *filter == state.filter {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();

    format!("> {}\n{}", search, buttons.join(" "))
}

pub fn render_task(task: &Task, language: Language) -> String {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let mut out = format!("{} {}  ({})", mark, task.title, task.id);
    if !task.description.is_empty() {
        out.push_str(&format!("\n    {}", task.description));
    }
    if let Some(due) = task.due_date {
        let label = translate(language, "due");
        out.push_str(&format!("\n    {}: {}", label, due.format("%Y-%m-%d")));
    }
    out
}

pub fn render_task_list(state: &TaskState, language: Language) -> String {
    let visible = state.visible_tasks();
    if visible.is_empty() {
        return translate(language, "noTasks").to_string();
    }
    visible
        .into_iter()
        .map(|task| render_task(task, language))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Field labels and the submit/cancel captions of the create or edit form.
pub struct FormLabels {
    pub heading: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub due_date: &'static str,
    pub submit: &'static str,
    pub cancel: Option<&'static str>,
}

pub fn form_labels(language: Language, editing: bool) -> FormLabels {
    FormLabels {
        heading: translate(language, "addNewTask"),
        title: translate(language, "title"),
        description: translate(language, "description"),
        due_date: translate(language, "dueDate"),
        submit: translate(language, if editing { "update" } else { "add" }),
        cancel: editing.then(|| translate(language, "cancel")),
    }
}

pub fn render_screen(state: &TaskState, language: Language) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        render_navbar(state, language),
        render_filters(state, language),
        render_task_list(state, language)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::state::TaskAction;
    use chrono::NaiveDate;

    fn state_with(tasks: Vec<Task>) -> TaskState {
        let mut state = TaskState::default();
        state.apply(TaskAction::LoadTasks(tasks));
        state
    }

    #[test]
    fn test_empty_list_shows_no_tasks() {
        let state = TaskState::default();
        assert_eq!(render_task_list(&state, Language::En), "No tasks found");
        assert_eq!(render_task_list(&state, Language::Es), "No se encontraron tareas");
    }

    #[test]
    fn test_task_row_shows_description_and_due_date() {
        let mut task = Task::new("Buy milk", "semi-skimmed", NaiveDate::from_ymd_opt(2024, 1, 1));
        task.completed = true;

        let row = render_task(&task, Language::Es);

        assert!(row.starts_with("[x] Buy milk"));
        assert!(row.contains("semi-skimmed"));
        assert!(row.contains("Vence: 2024-01-01"));
    }

    #[test]
    fn test_list_only_renders_visible_tasks() {
        let mut state = state_with(vec![
            Task::new("Buy milk", "", None),
            Task::new("Walk dog", "", None),
        ]);
        state.apply(TaskAction::SetSearch("DOG".into()));

        let list = render_task_list(&state, Language::En);

        assert!(list.contains("Walk dog"));
        assert!(!list.contains("Buy milk"));
    }

    #[test]
    fn test_filters_mark_selection() {
        let mut state = TaskState::default();
        state.apply(TaskAction::SetFilter(TaskFilter::Active));

        let filters = render_filters(&state, Language::En);

        assert_eq!(filters, "> Search tasks...\nAll [Active] Completed");
    }

    #[test]
    fn test_navbar_offers_the_other_theme_and_language() {
        let mut state = TaskState::default();
        assert_eq!(
            render_navbar(&state, Language::En),
            "Task Manager  [Switch to dark mode] [Switch to Spanish]"
        );

        state.apply(TaskAction::ToggleDarkMode);
        assert_eq!(
            render_navbar(&state, Language::Es),
            "Administrador de Tareas  [Cambiar a modo claro] [Cambiar a Inglés]"
        );
    }

    #[test]
    fn test_form_labels_depend_on_mode() {
        let add = form_labels(Language::En, false);
        assert_eq!(add.submit, "Add Task");
        assert!(add.cancel.is_none());

        let edit = form_labels(Language::Es, true);
        assert_eq!(edit.submit, "Actualizar Tarea");
        assert_eq!(edit.cancel, Some("Cancelar"));
    }
}
