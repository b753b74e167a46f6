use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with {0}")]
    Status(reqwest::StatusCode),

    #[error("Preferences file error: {0}")]
    Preferences(#[from] std::io::Error),

    #[error("Invalid preferences file: {0}")]
    Serialization(#[from] serde_json::Error),
}
