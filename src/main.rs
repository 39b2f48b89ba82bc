use clap::Parser;
use prompt_playground::cli::{Cli, Overrides};
use prompt_playground::commands;
use prompt_playground::core::config::{normalize_host, Settings};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(e) = run() {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli.overrides)?;
    tracing::debug!(host = %settings.host, model = %settings.model, "settings resolved");
    commands::dispatch(cli.command, &settings)
}

fn resolve_settings(overrides: &Overrides) -> Result<Settings, String> {
    let mut settings = Settings::load().map_err(|e| e.to_string())?;
    if let Some(host) = &overrides.host {
        settings.host = normalize_host(host);
    }
    if let Some(model) = overrides.model {
        settings.model = model;
    }
    if let Some(temp) = overrides.temp {
        settings.temperature = temp;
    }
    Ok(settings)
}
