use crate::model::TodoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Task text cannot be empty")]
    EmptyInput,

    #[error("Task not found: {0}")]
    NotFound(TodoId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No task ids left after {0}")]
    IdsExhausted(TodoId),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TodozError>;
