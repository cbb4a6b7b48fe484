//! Configuration for the connection to the storage service.

use std::env;

/// The environment variable holding the storage service's base URL.
const URL_VAR: &str = "URL";

/// The environment variable holding the storage service's access key.
const ANON_KEY_VAR: &str = "ANON_KEY";

/// The process-wide configuration for the storage service connection.
///
/// Built once in `main` and passed into the store constructor, so request
/// handlers never read the environment themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// The base URL of the storage service.
    pub storage_url: String,
    /// The access key sent with every storage request.
    pub anon_key: String,
}

impl AppConfig {
    /// Create a config with explicit values.
    pub fn new(storage_url: &str, anon_key: &str) -> Self {
        Self {
            storage_url: storage_url.to_owned(),
            anon_key: anon_key.to_owned(),
        }
    }

    /// Read the config from the `URL` and `ANON_KEY` environment variables.
    ///
    /// Missing variables default to the empty string: the gateway starts
    /// regardless, and the storage service rejects the first request instead.
    pub fn from_env() -> Self {
        Self {
            storage_url: env::var(URL_VAR).unwrap_or_default(),
            anon_key: env::var(ANON_KEY_VAR).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod app_config_tests {
    use std::env;

    use super::{ANON_KEY_VAR, AppConfig, URL_VAR};

    // Set and read both variables in a single test so parallel test threads
    // never observe each other's environment.
    #[test]
    fn from_env_reads_the_storage_variables_and_defaults_to_empty() {
        unsafe {
            env::remove_var(URL_VAR);
            env::remove_var(ANON_KEY_VAR);
        }

        assert_eq!(AppConfig::from_env(), AppConfig::new("", ""));

        unsafe {
            env::set_var(URL_VAR, "http://localhost:54321");
            env::set_var(ANON_KEY_VAR, "anon-key");
        }

        assert_eq!(
            AppConfig::from_env(),
            AppConfig::new("http://localhost:54321", "anon-key")
        );

        unsafe {
            env::remove_var(URL_VAR);
            env::remove_var(ANON_KEY_VAR);
        }
    }
}
