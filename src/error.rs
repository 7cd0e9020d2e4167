use thiserror::Error;

pub type FocusResult<T> = Result<T, FocusError>;

#[derive(Debug, Error)]
pub enum FocusError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
