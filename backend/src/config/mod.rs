//! Runtime settings read from the environment.
//!
//! A `.env` file in the working directory is loaded first when present;
//! variables already set in the process environment take precedence.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_EXPORT_DIR: &str = "exports";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Parent directory of the per-request export scratch directories.
    pub export_dir: PathBuf,
    /// Upper bound for the files of one import request together and for JSON
    /// export bodies.
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = AppConfig::default();

        let port = match get("RENTAL_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("RENTAL_PORT must be a port number ({}): {}", raw, e))?,
            None => defaults.port,
        };

        let max_upload_bytes = match get("RENTAL_MAX_UPLOAD_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                format!("RENTAL_MAX_UPLOAD_BYTES must be a byte count ({}): {}", raw, e)
            })?,
            None => defaults.max_upload_bytes,
        };

        Ok(AppConfig {
            host: get("RENTAL_HOST").unwrap_or(defaults.host),
            port,
            export_dir: get("RENTAL_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            max_upload_bytes,
        })
    }
}
