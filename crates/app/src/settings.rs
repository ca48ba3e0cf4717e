use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use healthchart_core::config::AppConfig;

/// Environment prefix; `HEALTHCHART__ENDPOINT__URL` sets `endpoint.url`.
pub const ENV_PREFIX: &str = "HEALTHCHART";

/// # Summary
/// Loads the application configuration.
///
/// # Logic
/// 1. Starts from `AppConfig::default()` (every section is `serde(default)`).
/// 2. Layers the TOML file: `path` when given (must exist), otherwise an
///    optional `healthchart.toml` in the working directory.
/// 3. Layers `HEALTHCHART__`-prefixed environment variables on top.
///
/// # Arguments
/// * `path`: explicit config file, if any.
///
/// # Returns
/// The merged configuration, or the `config` crate's error.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("healthchart").required(false),
    };

    Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
