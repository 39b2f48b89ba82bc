//! Save, select and delete operations over a session's prompt library.

use crate::core::session::SessionState;

use super::error::ValidationError;

/// Acknowledgement of a library action, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Info(String),
}

/// Stores `content` under `name`, replacing any earlier content for that name.
pub fn save(state: &mut SessionState, name: &str, content: &str) -> Result<Feedback, ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    let replaced = state.library.insert(name, content).is_some();
    tracing::info!(prompt = name, replaced, "prompt saved");
    Ok(Feedback::Success(if replaced {
        format!("Updated '{}'", name)
    } else {
        format!("Saved '{}'", name)
    }))
}

/// Makes `name` the system prompt used by the next run.
pub fn select(state: &mut SessionState, name: &str) -> Result<Feedback, ValidationError> {
    if state.library.is_empty() {
        return Err(ValidationError::EmptyLibrary);
    }
    if !state.library.contains(name) {
        return Err(ValidationError::UnknownPrompt(name.to_string()));
    }

    state.set_selected(Some(name.to_string()));
    tracing::debug!(prompt = name, "prompt selected");
    Ok(Feedback::Info(format!("Selected '{}'", name)))
}

/// Removes `name`. If it was the selected prompt the selection is cleared, so
/// a new one must be picked before the next run.
pub fn delete(state: &mut SessionState, name: &str) -> Result<Feedback, ValidationError> {
    if state.library.is_empty() {
        return Err(ValidationError::EmptyLibrary);
    }
    let was_selected = state.selected_name() == Some(name);
    if state.library.remove(name).is_none() {
        return Err(ValidationError::UnknownPrompt(name.to_string()));
    }

    state.revalidate();
    tracing::info!(prompt = name, was_selected, "prompt deleted");
    Ok(Feedback::Success(format!("Deleted '{}'", name)))
}
