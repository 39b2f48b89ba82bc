//! Session-level API: library management, inference and the run cycle.

mod client;
mod error;
mod library;
mod playground;

pub use client::{diagnostic, ChatBackend, InferenceClient, InferenceRequest, OllamaBackend};
pub use error::{ConfigError, InferenceError, ValidationError};
pub use library::{delete, save, select, Feedback};
pub use playground::{Playground, RunOutcome, RunState};
