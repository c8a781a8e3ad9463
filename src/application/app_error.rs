use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Unknown plan, or a plan without a checkout link.
    #[error("Invalid plan")]
    InvalidPlan,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidPlan)
    }
}

pub type AppResult<T> = Result<T, AppError>;
