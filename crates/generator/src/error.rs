use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Invalid generator input: {0}")]
    InvalidInput(String),

    #[error("Numeric domain error while generating series: {0}")]
    NumericDomain(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
