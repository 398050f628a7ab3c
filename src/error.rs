use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UtilsError>;
