//! Generation settings offered to the user: the model picker and the
//! temperature control.

use crate::api::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the locally served models the playground can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Model {
    #[default]
    Llama3,
    Llama3Instruct8b,
    Mistral,
    Phi3,
}

impl Model {
    /// Every supported model, in picker order.
    pub const ALL: [Model; 4] = [
        Model::Llama3,
        Model::Llama3Instruct8b,
        Model::Mistral,
        Model::Phi3,
    ];

    /// The identifier sent to the runtime.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Llama3 => "llama3",
            Model::Llama3Instruct8b => "llama3:8b-instruct",
            Model::Mistral => "mistral",
            Model::Phi3 => "phi3",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Model::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownModel(s.to_string()))
    }
}

impl TryFrom<String> for Model {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.as_str().to_string()
    }
}

/// Sampling temperature, always within `[0.0, 2.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f32")]
pub struct Temperature(f32);

impl Temperature {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 2.0;
    pub const DEFAULT: f32 = 1.0;

    /// Accepts `value` only if it lies within range.
    pub fn new(value: f32) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::TemperatureOutOfRange(value))
        }
    }

    /// Forces `value` into range. NaN becomes the default.
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            Self::default()
        } else {
            Self(value.clamp(Self::MIN, Self::MAX))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Temperature> for f32 {
    fn from(t: Temperature) -> Self {
        t.0
    }
}

impl FromStr for Temperature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f32 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", s.trim()))?;
        Temperature::new(value).map_err(|e| e.to_string())
    }
}
