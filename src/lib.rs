pub mod client;
pub mod error;
pub mod extract;
pub mod i18n;
pub mod routes;
pub mod state;
pub mod storage;
pub mod task;
