//! One user session: state, library operations and the run cycle.

use crate::core::model::Model;
use crate::core::session::SessionState;

use super::client::{ChatBackend, InferenceClient, InferenceRequest};
use super::error::ValidationError;
use super::library::{self, Feedback};

/// Result of a run that reached the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Text generated by the model.
    Completed(String),
    /// Diagnostic describing why the model call failed.
    Failed(String),
}

impl RunOutcome {
    /// The text to show in the response area, whichever way the run ended.
    pub fn text(&self) -> &str {
        match self {
            RunOutcome::Completed(t) | RunOutcome::Failed(t) => t,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Where the run cycle currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Validating,
    Waiting,
    Done(RunOutcome),
}

/// A session bound to an inference backend.
pub struct Playground<B> {
    state: SessionState,
    client: InferenceClient<B>,
    run_state: RunState,
}

impl<B: ChatBackend> Playground<B> {
    pub fn new(state: SessionState, backend: B) -> Self {
        Self {
            state,
            client: InferenceClient::new(backend),
            run_state: RunState::Idle,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.state
    }

    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    pub fn save(&mut self, name: &str, content: &str) -> Result<Feedback, ValidationError> {
        library::save(&mut self.state, name, content)
    }

    pub fn select(&mut self, name: &str) -> Result<Feedback, ValidationError> {
        library::select(&mut self.state, name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Feedback, ValidationError> {
        library::delete(&mut self.state, name)
    }

    pub fn set_model(&mut self, model: Model) {
        self.state.set_model(model);
    }

    pub fn set_temperature(&mut self, value: f32) -> Result<(), ValidationError> {
        self.state.set_temperature(value)
    }

    /// Clears a finished run so the session is idle again.
    pub fn acknowledge(&mut self) {
        if matches!(self.run_state, RunState::Done(_)) {
            self.run_state = RunState::Idle;
        }
    }

    /// Runs the selected prompt against `input` with the current settings.
    ///
    /// Validation failures return the session to `Idle` without contacting
    /// the backend. A request that reaches the backend ends in `Done`, and its
    /// outcome is returned. Dropping the future while it waits puts the
    /// session back to `Idle`.
    pub async fn run(&mut self, input: &str) -> Result<RunOutcome, ValidationError> {
        self.acknowledge();

        self.transition(RunState::Validating);
        self.state.revalidate();
        let request = match self.validate(input) {
            Ok(r) => r,
            Err(e) => {
                self.transition(RunState::Idle);
                return Err(e);
            }
        };

        let guard = WaitGuard::enter(&mut self.run_state);
        let outcome = match self.client.complete(&request).await {
            Ok(text) => RunOutcome::Completed(text),
            Err(diagnostic) => RunOutcome::Failed(diagnostic),
        };
        guard.finish(outcome.clone());
        Ok(outcome)
    }

    /// Reports whether `run(input)` would pass validation, without changing state.
    pub fn check(&self, input: &str) -> Result<(), ValidationError> {
        self.validate(input).map(|_| ())
    }

    fn validate(&self, input: &str) -> Result<InferenceRequest, ValidationError> {
        let system_prompt = self.state.selected_prompt();
        if system_prompt.is_empty() {
            return Err(ValidationError::NoPromptSelected);
        }
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        Ok(InferenceRequest {
            system_prompt: system_prompt.to_string(),
            user_input: input.to_string(),
            model: self.state.model(),
            temperature: self.state.temperature(),
        })
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!(from = ?self.run_state, to = ?next, "run state");
        self.run_state = next;
    }
}

/// Holds the session in `Waiting` for the duration of a backend call and
/// returns it to `Idle` if the call is abandoned.
struct WaitGuard<'a> {
    state: &'a mut RunState,
}

impl<'a> WaitGuard<'a> {
    fn enter(state: &'a mut RunState) -> Self {
        tracing::debug!(from = ?state, to = ?RunState::Waiting, "run state");
        *state = RunState::Waiting;
        Self { state }
    }

    fn finish(mut self, outcome: RunOutcome) {
        let next = RunState::Done(outcome);
        tracing::debug!(from = ?self.state, to = ?next, "run state");
        *self.state = next;
    }
}

impl Drop for WaitGuard<'_> {
    fn drop(&mut self) {
        if *self.state == RunState::Waiting {
            tracing::debug!("run abandoned while waiting, back to idle");
            *self.state = RunState::Idle;
        }
    }
}
