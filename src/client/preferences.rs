use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tokio::fs;

use super::error::ClientError;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Small key-value JSON file holding client-side preferences.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `false` when the file or the key does not exist yet.
    pub async fn dark_mode(&self) -> Result<bool, ClientError> {
        let values = self.read().await?;
        Ok(values
            .get(DARK_MODE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<(), ClientError> {
        let mut values = self.read().await?;
        values.insert(DARK_MODE_KEY.to_string(), Value::Bool(enabled));
        fs::write(&self.path, serde_json::to_vec_pretty(&values)?).await?;
        Ok(())
    }

    async fn read(&self) -> Result<Map<String, Value>, ClientError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}
