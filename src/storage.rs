//! Flat JSON file backing the task collection.
//!
//! Every call reads or rewrites the whole array. Writers hold [`JsonStore::lock`]
//! across their read-modify-write cycle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::Result;

#[derive(Clone)]
pub struct JsonStore {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonStore {
    /// Opens the store, creating the file with an empty array if it does not exist yet.
    pub async fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        if !fs::try_exists(&path).await? {
            fs::write(&path, "[]").await?;
            tracing::info!("Created empty task file at {}", path.display());
        }

        Ok(Self {
            path: Arc::new(path),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub async fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let raw = fs::read_to_string(self.path()).await?;
        let items = serde_json::from_str(&raw)?;
        Ok(items)
    }

    /// Overwrites the file. The array lands in a sibling temp file first and is
    /// renamed into place.
    pub async fn write_all<T: Serialize>(&self, items: &[T]) -> Result<()> {
        let json = serde_json::to_vec_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");

        fs::write(&tmp, json).await?;
        fs::rename(&tmp, self.path()).await?;

        tracing::debug!(count = items.len(), "Wrote task file");
        Ok(())
    }
}
