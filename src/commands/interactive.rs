use crate::api::{Feedback, OllamaBackend, Playground, ValidationError};
use crate::cli::{ReplCmd, ReplLine};
use clap::CommandFactory;
use crate::commands::display;
use crate::core::config::Settings;
use crate::core::session::SessionState;
use clap::Parser;
use console::style;
use dialoguer::{Editor, Input};
use spinners::{Spinner, Spinners};
use tokio::runtime::Runtime;

/// Run the playground as an interactive session. The prompt library lives
/// only as long as this function does.
pub fn run(settings: &Settings) -> Result<(), String> {
    let rt = Runtime::new().map_err(|e| e.to_string())?;
    let mut playground = Playground::new(
        SessionState::from_settings(settings),
        OllamaBackend::new(&settings.host),
    );

    println!("Prompt Playground. The prompt library lasts until you leave.");
    println!("{}", display::commands(&ReplLine::command()));
    println!("{}", display::settings(playground.session(), &settings.host));

    loop {
        let input: String = Input::new()
            .with_prompt(format!("{}", style("pp >").blue().bold()))
            .interact_text()
            .map_err(|e| format!("Input error: {}", e))?;

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let args = match shell_words::split(input) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("• Error parsing command: {}", e);
                continue;
            }
        };

        match ReplLine::try_parse_from(args) {
            Ok(line) => {
                playground.acknowledge();
                if let Err(e) = handle(line.command, &mut playground, settings, &rt) {
                    eprintln!("• {}", e);
                }
            }
            Err(e) => {
                e.print().unwrap_or(());
            }
        }
    }
    Ok(())
}

fn handle(
    command: ReplCmd,
    playground: &mut Playground<OllamaBackend>,
    settings: &Settings,
    rt: &Runtime,
) -> Result<(), String> {
    match command {
        ReplCmd::Run { input } => {
            let input = input.join(" ");
            if let Err(e) = playground.check(&input) {
                println!("{}", display::warning(&e));
                return Ok(());
            }

            let mut sp = Spinner::new(Spinners::Dots9, "Thinking...".into());
            let result = rt.block_on(playground.run(&input));
            match result {
                Ok(outcome) => {
                    if outcome.is_success() {
                        sp.stop_with_message("✔ Response received.".into());
                    } else {
                        sp.stop_with_message("✘ Request failed.".into());
                    }
                    println!("{}", display::response(&outcome));
                }
                Err(e) => {
                    sp.stop_with_newline();
                    println!("{}", display::warning(&e));
                }
            }
        }
        ReplCmd::Model { name } => {
            playground.set_model(name);
            println!("{} Model set to {}", style("✔").green().bold(), style(name).yellow());
        }
        ReplCmd::Temp { value } => match playground.set_temperature(value) {
            Ok(()) => println!(
                "{} Temperature set to {}",
                style("✔").green().bold(),
                style(playground.session().temperature()).yellow()
            ),
            Err(e) => println!("{}", display::warning(&e)),
        },
        ReplCmd::Select { name } => {
            report(playground.select(&name));
        }
        ReplCmd::Save { name, content } => {
            let content = match content {
                Some(c) => c,
                None => Editor::new()
                    .edit("")
                    .map_err(|e| format!("Editor error: {}", e))?
                    .unwrap_or_default(),
            };
            if report(playground.save(&name, &content)) {
                println!("{}", display::library(playground.session()));
            }
        }
        ReplCmd::Delete { name } => {
            let name = match name.or_else(|| playground.session().selected_name().map(str::to_string)) {
                Some(n) => n,
                None if playground.session().library.is_empty() => {
                    println!("{}", display::warning(&ValidationError::EmptyLibrary));
                    return Ok(());
                }
                None => {
                    println!("{}", display::warning(&ValidationError::NoPromptSelected));
                    return Ok(());
                }
            };
            if report(playground.delete(&name)) {
                println!("{}", display::library(playground.session()));
            }
        }
        ReplCmd::List => println!("{}", display::library(playground.session())),
        ReplCmd::Settings => println!("{}", display::settings(playground.session(), &settings.host)),
        ReplCmd::Models => println!("{}", display::models(playground.session().model())),
    }
    Ok(())
}

/// Prints the outcome of a library action; returns whether it succeeded.
fn report(result: Result<Feedback, ValidationError>) -> bool {
    match result {
        Ok(fb) => {
            println!("{}", display::feedback(&fb));
            true
        }
        Err(e) => {
            println!("{}", display::warning(&e));
            false
        }
    }
}
