use thiserror::Error;

/// Harness-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CoreError(#[from] isomatch_core::error::CoreError),

    #[error("Report serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
