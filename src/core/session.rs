//! Per-session state: the prompt library, the current selection and the
//! generation settings.

use super::config::Settings;
use super::library::PromptLibrary;
use super::model::{Model, Temperature};
use crate::api::ValidationError;

/// Everything one user session remembers. Created when the session starts and
/// dropped when it ends; nothing here is written to disk.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub library: PromptLibrary,
    selected: Option<String>,
    model: Model,
    temperature: Temperature,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with the configured default model and temperature.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            model: settings.model,
            temperature: settings.temperature,
            ..Self::default()
        }
    }

    /// Name of the selected prompt, if it is still in the library.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .as_deref()
            .filter(|name| self.library.contains(name))
    }

    /// Content of the selected prompt as it is in the library right now, or
    /// an empty string when nothing valid is selected.
    pub fn selected_prompt(&self) -> &str {
        self.selected
            .as_deref()
            .and_then(|name| self.library.get(name))
            .unwrap_or("")
    }

    /// Selects `name`. Callers make sure it exists.
    pub(crate) fn set_selected(&mut self, name: Option<String>) {
        self.selected = name;
    }

    /// Drops the selection if its prompt has left the library.
    pub fn revalidate(&mut self) {
        if let Some(name) = self.selected.as_deref() {
            if !self.library.contains(name) {
                tracing::debug!(prompt = name, "selection no longer in library, clearing");
                self.selected = None;
            }
        }
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Rejects values outside `[0.0, 2.0]`, leaving the old value in place.
    pub fn set_temperature(&mut self, value: f32) -> Result<(), ValidationError> {
        self.temperature = Temperature::new(value)?;
        Ok(())
    }
}
