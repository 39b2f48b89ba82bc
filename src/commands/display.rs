//! Rendering of the response area, the settings panel and library feedback.

use crate::api::{Feedback, RunOutcome, ValidationError};
use crate::core::model::Model;
use crate::core::session::SessionState;
use clap::Command;
use console::style;

/// The response area shown after a run.
pub fn response(outcome: &RunOutcome) -> String {
    let header = if outcome.is_success() {
        style("Response").green().bold()
    } else {
        style("Response").red().bold()
    };
    format!("\n{}\n{}\n", header, outcome.text())
}

/// The settings panel: model, temperature and selected prompt.
pub fn settings(state: &SessionState, host: &str) -> String {
    let selected = match state.selected_name() {
        Some(name) => style(name.to_string()).yellow().to_string(),
        None => style("none").dim().to_string(),
    };
    format!(
        "{}\n  {}: {}\n  {}: {}\n  {}: {}\n  {}: {}",
        style("Settings").bold().underlined(),
        style("Model").cyan(),
        style(state.model()).yellow(),
        style("Temperature").cyan(),
        style(state.temperature()).yellow(),
        style("Prompt").cyan(),
        selected,
        style("Host").cyan(),
        host
    )
}

/// The prompt library, marking the selected entry.
pub fn library(state: &SessionState) -> String {
    if state.library.is_empty() {
        return style("No prompts saved").blue().to_string();
    }
    let selected = state.selected_name();
    let mut out = style("Prompt Library:").green().bold().to_string();
    for entry in state.library.iter() {
        let marker = if Some(entry.name.as_str()) == selected {
            style("▶").green().bold()
        } else {
            style("•").green()
        };
        out.push_str(&format!(
            "\n  {} {} - {}",
            marker,
            style(&entry.name).yellow(),
            preview(&entry.content)
        ));
    }
    out
}

/// Supported models, marking the active one.
pub fn models(active: Model) -> String {
    Model::ALL
        .iter()
        .map(|m| {
            if *m == active {
                format!("  {} {}", style("▶").green().bold(), style(m).yellow())
            } else {
                format!("  {} {}", style("•").green(), m)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per in-session command, taken from its clap definition.
pub fn commands(cmd: &Command) -> String {
    let mut out = style("Commands:").green().bold().to_string();
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        let about = sub.get_about().map(|a| a.to_string()).unwrap_or_default();
        out.push_str(&format!("\n  {:<10} {}", style(sub.get_name()).yellow(), about));
    }
    out.push_str(&format!(
        "\n  {:<10} {}",
        style("exit").yellow(),
        "Leave the session (also 'quit'); '<command> --help' for details"
    ));
    out
}

pub fn feedback(fb: &Feedback) -> String {
    match fb {
        Feedback::Success(m) => format!("{} {}", style("✔").green().bold(), m),
        Feedback::Info(m) => format!("{} {}", style("•").blue().bold(), m),
    }
}

/// A validation problem; informational ones are not shown as warnings.
pub fn warning(err: &ValidationError) -> String {
    if err.is_informational() {
        format!("{} {}", style("•").blue().bold(), err)
    } else {
        format!("{} {}", style("⚠").yellow().bold(), style(err).yellow())
    }
}

/// First line of a prompt, shortened for list display.
fn preview(content: &str) -> String {
    const MAX: usize = 48;
    let line = content.lines().next().unwrap_or("");
    if line.chars().count() > MAX || content.lines().nth(1).is_some() {
        let cut: String = line.chars().take(MAX).collect();
        format!("{}…", cut)
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use console::strip_ansi_codes;

    #[test]
    fn library_marks_selection() {
        let mut s = SessionState::new();
        api::save(&mut s, "Pirate", "Talk like a pirate.").unwrap();
        api::save(&mut s, "Poet", "Answer in verse.\nAlways rhyme.").unwrap();
        api::select(&mut s, "Pirate").unwrap();

        let out = strip_ansi_codes(&library(&s)).to_string();
        assert!(out.contains("▶ Pirate - Talk like a pirate."));
        assert!(out.contains("• Poet - Answer in verse.…"));
    }

    #[test]
    fn empty_library_message() {
        let out = strip_ansi_codes(&library(&SessionState::new())).to_string();
        assert_eq!(out, "No prompts saved");
    }

    #[test]
    fn settings_panel() {
        let out = strip_ansi_codes(&settings(&SessionState::new(), "http://localhost:11434")).to_string();
        assert!(out.contains("Model: llama3"));
        assert!(out.contains("Temperature: 1.00"));
        assert!(out.contains("Prompt: none"));
    }

    #[test]
    fn lists_session_commands() {
        use crate::cli::ReplLine;
        use clap::CommandFactory;

        let out = strip_ansi_codes(&commands(&ReplLine::command())).to_string();
        for name in ["run", "model", "temp", "select", "save", "delete", "list", "settings", "exit"] {
            assert!(out.contains(&format!("  {}", name)), "missing {}", name);
        }
        assert!(out.contains("Send the input to the model using the selected prompt"));
    }

    #[test]
    fn response_shows_text_verbatim() {
        let out = response(&RunOutcome::Completed("Arr, 4!".into()));
        assert!(strip_ansi_codes(&out).contains("Response\nArr, 4!"));
    }
}
