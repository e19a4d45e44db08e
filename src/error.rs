use std::io;

/// Errors surfaced to the menu loop.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Project with ID={id} does not exist.")]
    NotFound { id: i32 },

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Console error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
