use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Invalid transaction count: expected > 0, got {actual}")]
    InvalidTotalCount { actual: usize },

    #[error("Invalid fraud ratio: expected a value in [0.0, 1.0], got {actual}")]
    InvalidFraudRatio { actual: f64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GenResult<T> = Result<T, GenError>;
