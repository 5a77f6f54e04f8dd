pub mod models;

use anyhow::{Context, Result};
use std::{fs, path::Path};
use validator::Validate;

use crate::api::omglol::API_BASE_URL;
pub use models::{Config, ConfigFile};

pub const USERNAME_ENV: &str = "OMGLOL_USERNAME";
pub const API_KEY_ENV: &str = "OMGLOL_API_KEY";
/// Older releases read the key from this variable.
pub const LEGACY_API_KEY_ENV: &str = "OMGLOL_APIKEY";

/// Loads the configuration from `path` (if any) and the process environment.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let file = match path {
        Some(path) => read_file(path)?,
        None => ConfigFile::default(),
    };

    resolve(file, |key| std::env::var(key).ok())
}

pub fn read_file(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merges file values over environment values and validates the result.
/// Empty strings count as unset.
pub fn resolve<F>(file: ConfigFile, env: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| env(key).filter(|value| !value.is_empty());

    let username = non_empty(file.username)
        .or_else(|| lookup(USERNAME_ENV))
        .unwrap_or_default();
    let api_key = non_empty(file.api_key)
        .or_else(|| lookup(API_KEY_ENV))
        .or_else(|| lookup(LEGACY_API_KEY_ENV))
        .unwrap_or_default();
    let base_url = non_empty(file.base_url).unwrap_or_else(|| API_BASE_URL.to_string());

    let config = Config {
        username,
        api_key,
        base_url,
    };
    config.validate().with_context(|| {
        format!(
            "Invalid provider configuration (set it in the config file or use {} and {})",
            USERNAME_ENV, API_KEY_ENV
        )
    })?;

    Ok(config)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
