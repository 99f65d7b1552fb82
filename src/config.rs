//! Frontend Configuration
//!
//! The API base URL is fixed at build time: `TODO_API_URL=https://... trunk build`.

use todo_sync::{ClientConfig, ConfigError};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

pub fn api_base_url() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL)
}

pub fn client_config() -> Result<ClientConfig, ConfigError> {
    ClientConfig::from_base_url(api_base_url())
}
