use crate::cli::Cmd;
use crate::core::config::Settings;

pub mod ask;
pub mod display;
pub mod interactive;
pub mod models;

/// Dispatches the parsed command to the appropriate handler.
pub fn dispatch(command: Option<Cmd>, settings: &Settings) -> Result<(), String> {
    match command.unwrap_or(Cmd::Interactive) {
        Cmd::Interactive => interactive::run(settings),
        Cmd::Ask {
            system,
            input,
            json,
        } => ask::run(settings, &system, &input, json),
        Cmd::Models => models::run(settings),
    }
}
