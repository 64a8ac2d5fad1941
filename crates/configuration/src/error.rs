use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A layer could not be read or deserialized: a missing explicit file,
    /// malformed TOML, or a `QUOTESCOPE__*` variable of the wrong type.
    #[error("Failed to read configuration layers (file and QUOTESCOPE__* environment): {0}")]
    LoadError(#[from] config::ConfigError),

    /// The merged settings parsed but are out of range.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}
