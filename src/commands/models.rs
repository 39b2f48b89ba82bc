use crate::commands::display;
use crate::core::config::Settings;
use console::style;

/// List the models that can be picked, marking the configured default.
pub fn run(settings: &Settings) -> Result<(), String> {
    println!("{}", style("Models:").green().bold());
    println!("{}", display::models(settings.model));
    Ok(())
}
