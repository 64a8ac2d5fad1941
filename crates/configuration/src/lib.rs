use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    AnalysisSettings, Config, DisplaySettings, LoggingSettings, SeriesSettings, WalkSettings,
};

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `QUOTESCOPE__SERIES__SEED=42`.
pub const ENV_PREFIX: &str = "QUOTESCOPE";

/// Loads and validates the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file, then
/// `QUOTESCOPE__<SECTION>__<KEY>` environment variables. With `path == None`
/// the default `config.toml` is optional; an explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_layers(path, None)
}

/// `env` replaces the process environment as the override layer when given.
fn load_layers(
    path: Option<&Path>,
    env: Option<config::Map<String, String>>,
) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("series.anchors")
                .with_list_parse_key("analysis.moving_average_windows")
                .source(env),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;
    Ok(config)
}
