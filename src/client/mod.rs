//! Client-side core: the state container, its HTTP backend and text views.

pub mod api;
pub mod context;
pub mod error;
pub mod preferences;
pub mod state;
pub mod view;

pub use api::{HttpTaskApi, TaskApi};
pub use context::TaskContext;
pub use error::ClientError;
pub use preferences::Preferences;
pub use state::{TaskAction, TaskState};
