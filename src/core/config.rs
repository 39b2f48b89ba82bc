//! Loads playground defaults from `~/.prompt-playground/config.toml`.

use super::model::{Model, Temperature};
use crate::api::ConfigError;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the Ollama runtime listens unless told otherwise.
pub const DEFAULT_HOST: &str = "http://127.0.0.1:11434";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    host: Option<String>,
    model: Option<Model>,
    temperature: Option<f32>,
}

/// Resolved defaults for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the model-serving runtime.
    pub host: String,
    pub model: Model,
    pub temperature: Temperature,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            model: Model::default(),
            temperature: Temperature::default(),
        }
    }
}

impl Settings {
    /// Reads the config file in the user's home directory. A missing file
    /// yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let home = env::var("HOME").map_err(|_| ConfigError::NoHome)?;
        Self::load_from(&config_path(Path::new(&home)))
    }

    /// Reads settings from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config file");

        let mut settings = Self::default();
        if let Some(host) = file.host {
            settings.host = normalize_host(&host);
        }
        if let Some(model) = file.model {
            settings.model = model;
        }
        if let Some(t) = file.temperature {
            settings.temperature = Temperature::clamped(t);
            if settings.temperature.value() != t {
                tracing::warn!(
                    configured = t,
                    used = settings.temperature.value(),
                    "temperature out of range, clamped"
                );
            }
        }
        Ok(settings)
    }
}

/// Adds an `http://` scheme to bare `host:port` values such as those found in
/// `OLLAMA_HOST`.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

/// Location of the config file under `home`.
pub fn config_path(home: &Path) -> PathBuf {
    home.join(".prompt-playground").join("config.toml")
}
