use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Numeric domain error: {0}")]
    NumericDomain(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
