//! English/Spanish UI strings.
//!
//! Lookups fall back to the key itself when no entry exists.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

struct Entry {
    key: &'static str,
    en: &'static str,
    es: &'static str,
}

const fn entry(key: &'static str, en: &'static str, es: &'static str) -> Entry {
    Entry { key, en, es }
}

static TRANSLATIONS: &[Entry] = &[
    entry("taskManager", "Task Manager", "Administrador de Tareas"),
    entry("addNewTask", "Add New Task", "Agregar Nueva Tarea"),
    entry("title", "Title", "Título"),
    entry("description", "Description", "Descripción"),
    entry("dueDate", "Due Date", "Fecha de Vencimiento"),
    entry("cancel", "Cancel", "Cancelar"),
    entry("update", "Update Task", "Actualizar Tarea"),
    entry("add", "Add Task", "Agregar Tarea"),
    entry("searchTasks", "Search tasks...", "Buscar tareas..."),
    entry("all", "All", "Todas"),
    entry("active", "Active", "Activas"),
    entry("completed", "Completed", "Completadas"),
    entry("noTasks", "No tasks found", "No se encontraron tareas"),
    entry("due", "Due", "Vence"),
    entry("switchToDark", "Switch to dark mode", "Cambiar a modo oscuro"),
    entry("switchToLight", "Switch to light mode", "Cambiar a modo claro"),
    entry("switchToSpanish", "Switch to Spanish", "Cambiar a Español"),
    entry("switchToEnglish", "Switch to English", "Cambiar a Inglés"),
];

pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    TRANSLATIONS
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| match language {
            Language::En => entry.en,
            Language::Es => entry.es,
        })
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_keys() {
        assert_eq!(translate(Language::En, "noTasks"), "No tasks found");
        assert_eq!(translate(Language::Es, "noTasks"), "No se encontraron tareas");
        assert_eq!(translate(Language::Es, "completed"), "Completadas");
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        assert_eq!(translate(Language::En, "missingKey"), "missingKey");
        assert_eq!(translate(Language::Es, "missingKey"), "missingKey");
    }

    #[test]
    fn test_language_toggle_and_parse() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Es);
        assert_eq!(Language::Es.toggle(), Language::En);
        assert_eq!("ES".parse::<Language>(), Ok(Language::Es));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_every_filter_label_is_translated() {
        for key in ["all", "active", "completed"] {
            assert_ne!(translate(Language::Es, key), key);
        }
    }
}
