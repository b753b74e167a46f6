//! Terminal front-end for the task server.
//!
//! Every invocation loads the list, applies one command through the task
//! context and prints the resulting screen.

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use todo_manager::{
    client::{
        view::render_screen, HttpTaskApi, Preferences, TaskAction, TaskApi, TaskContext,
        TaskState,
    },
    i18n::Language,
    task::{Task, TaskFilter},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Personal to-do list client")]
struct Cli {
    /// Interface language (en or es)
    #[arg(long = "lang", global = true, default_value = "en", value_parser = parse_language)]
    language: Language,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Show the task list
    List {
        /// all, active or completed
        #[arg(long, value_parser = parse_filter)]
        status: Option<TaskFilter>,
        /// Case-insensitive text to look for in titles and descriptions
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a task
    Add {
        title: String,
        /// Due date as YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Change the title, due date or description of a task
    Edit {
        /// Full task id or a unique prefix
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Due date as YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Flip a task between active and completed
    Toggle {
        /// Full task id or a unique prefix
        id: String,
    },
    /// Delete a task
    Delete {
        /// Full task id or a unique prefix
        id: String,
    },
    /// Switch between light and dark mode
    Theme,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    raw.parse::<NaiveDate>()
        .map_err(|_| format!("'{}' is not a YYYY-MM-DD date", raw))
}

fn parse_filter(raw: &str) -> Result<TaskFilter, String> {
    raw.parse()
}

fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse()
}

/// Resolves a full id or a unique id prefix against the loaded tasks.
fn find_task<'a>(state: &'a TaskState, id: &str) -> anyhow::Result<&'a Task> {
    let mut matches = state
        .tasks
        .iter()
        .filter(|task| task.id.to_string().starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task),
        (Some(_), Some(_)) => bail!("id prefix '{}' is ambiguous", id),
        (None, _) => bail!("no task with id '{}'", id),
    }
}

async fn run<A: TaskApi>(ctx: &mut TaskContext<A>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { status, search } => {
            if let Some(status) = status {
                ctx.dispatch(TaskAction::SetFilter(status)).await?;
            }
            if let Some(search) = search {
                ctx.dispatch(TaskAction::SetSearch(search)).await?;
            }
        }
        Command::Add {
            title,
            due,
            description,
        } => {
            let draft = Task::new(title, description.unwrap_or_default(), due);
            ctx.dispatch(TaskAction::AddTask(draft)).await?;
        }
        Command::Edit {
            id,
            title,
            due,
            description,
        } => {
            let mut task = find_task(ctx.state(), &id)?.clone();
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(description) = description {
                task.description = description;
            }
            if due.is_some() {
                task.due_date = due;
            }
            ctx.dispatch(TaskAction::UpdateTask(task)).await?;
        }
        Command::Toggle { id } => {
            let mut task = find_task(ctx.state(), &id)?.clone();
            task.completed = !task.completed;
            ctx.dispatch(TaskAction::UpdateTask(task)).await?;
        }
        Command::Delete { id } => {
            let id = find_task(ctx.state(), &id)?.id;
            ctx.dispatch(TaskAction::DeleteTask(id)).await?;
        }
        Command::Theme => ctx.dispatch(TaskAction::ToggleDarkMode).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::List {
        status: None,
        search: None,
    });

    let api_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000/api".to_string());
    let preferences_file = std::env::var("TODO_PREFERENCES_FILE")
        .unwrap_or_else(|_| ".todo-preferences.json".to_string());

    let mut ctx = TaskContext::new(
        HttpTaskApi::new(api_url),
        Preferences::new(preferences_file),
    );
    ctx.load().await.context("could not load tasks")?;
    run(&mut ctx, command).await?;

    println!("{}", render_screen(ctx.state(), cli.language));
    Ok(())
}
