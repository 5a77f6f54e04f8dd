use serde::Deserialize;
use validator::Validate;

/// Provider settings as written in a YAML file. Every field is optional so
/// the environment can fill in the rest.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub username: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Clone, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: String,

    #[validate(url(message = "Base URL must be a valid URL"))]
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("api_key", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
