use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task has not been saved yet")]
    NotPersisted,

    #[error("Task not found: {0}")]
    NotFound(i64),
}

pub type Result<T> = std::result::Result<T, StoreError>;
