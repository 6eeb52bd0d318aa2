use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown instance group role: {0}")]
    UnknownRole(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
