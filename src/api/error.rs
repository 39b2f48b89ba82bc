//! Error types for the library API.

use thiserror::Error;

/// Local, recoverable problems with a user action. State is never mutated
/// when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Save was attempted without a prompt name.
    #[error("Enter a prompt name")]
    EmptyName,

    /// Save was attempted without prompt content.
    #[error("Enter prompt content")]
    EmptyContent,

    /// Select or delete was attempted while the library holds no prompts.
    #[error("No prompts saved")]
    EmptyLibrary,

    /// The named prompt is not in the library.
    #[error("No prompt named '{0}'")]
    UnknownPrompt(String),

    /// A run was requested without a selected prompt.
    #[error("Select a prompt first")]
    NoPromptSelected,

    /// A run was requested with blank user input.
    #[error("Enter input")]
    EmptyInput,

    /// The model identifier is not one of the supported models.
    #[error("Unknown model '{0}' (expected one of: llama3, llama3:8b-instruct, mistral, phi3)")]
    UnknownModel(String),

    /// The temperature is outside `[0.0, 2.0]`.
    #[error("Temperature {0} is outside the range 0.0 to 2.0")]
    TemperatureOutOfRange(f32),
}

impl ValidationError {
    /// Whether the condition is a plain notice rather than a warning.
    pub fn is_informational(&self) -> bool {
        matches!(self, ValidationError::EmptyLibrary)
    }
}

/// A failure reported by the model-serving runtime.
#[derive(Error, Debug)]
pub enum InferenceError {
    /// The request could not be sent or the reply could not be decoded.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The runtime answered with a non-success status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The backend failed for a reason it only described as text.
    #[error("{0}")]
    Backend(String),
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The home directory could not be determined.
    #[error("Unable to determine HOME directory")]
    NoHome,

    /// An underlying file I/O error occurred.
    #[error("Failed to read config.toml: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has unexpected keys.
    #[error("Failed to parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}
