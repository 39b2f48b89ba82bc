use crate::api::{OllamaBackend, Playground, RunOutcome};
use crate::commands::display;
use crate::core::config::Settings;
use crate::core::session::SessionState;
use serde_json::json;
use spinners::{Spinner, Spinners};

/// Run one system prompt against one input and print the response.
///
/// A failed model call is printed like any other response; only validation
/// problems are returned as errors.
pub fn run(settings: &Settings, system: &str, input: &[String], as_json: bool) -> Result<(), String> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;
    let mut playground = Playground::new(
        SessionState::from_settings(settings),
        OllamaBackend::new(&settings.host),
    );

    const NAME: &str = "ask";
    playground.save(NAME, system).map_err(|e| e.to_string())?;
    playground.select(NAME).map_err(|e| e.to_string())?;

    let input = input.join(" ");
    playground.check(&input).map_err(|e| e.to_string())?;

    let result = if as_json {
        rt.block_on(playground.run(&input))
    } else {
        let mut sp = Spinner::new(Spinners::Dots9, "Thinking...".into());
        let result = rt.block_on(playground.run(&input));
        sp.stop_with_newline();
        result
    };
    let outcome = result.map_err(|e| e.to_string())?;

    if as_json {
        let session = playground.session();
        let body = json!({
            "model": session.model(),
            "temperature": session.temperature(),
            "ok": outcome.is_success(),
            "text": outcome.text(),
        });
        println!("{}", serde_json::to_string_pretty(&body).map_err(|e| e.to_string())?);
    } else {
        println!("{}", display::response(&outcome));
    }

    match outcome {
        RunOutcome::Completed(_) => Ok(()),
        RunOutcome::Failed(_) => Err("Model request failed".to_string()),
    }
}
