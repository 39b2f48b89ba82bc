//! Defines the command-line interface structure using clap.

use crate::core::model::{Model, Temperature};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "prompt-playground",
    version,
    about = "Test system prompts against a local Ollama runtime"
)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Cmd>,
}

/// Values that take precedence over `~/.prompt-playground/config.toml`.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Base URL of the Ollama server
    #[arg(long, global = true, env = "OLLAMA_HOST")]
    pub host: Option<String>,
    /// Model to start with
    #[arg(long, global = true)]
    pub model: Option<Model>,
    /// Temperature to start with (0.0 to 2.0)
    #[arg(long, global = true)]
    pub temp: Option<Temperature>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Start an interactive session (default)
    Interactive,
    /// Run one system prompt against one input and print the response
    Ask {
        /// System prompt to send ahead of the input
        #[arg(long)]
        system: String,
        /// User message
        #[arg(required = true)]
        input: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the models that can be picked
    Models,
}

/// Commands understood inside the interactive session.
#[derive(Parser)]
#[command(name = "playground", no_binary_name = true, disable_version_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCmd,
}

#[derive(Subcommand)]
pub enum ReplCmd {
    /// Send the input to the model using the selected prompt
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },
    /// Pick the model
    Model { name: Model },
    /// Set the temperature (0.0 to 2.0)
    Temp {
        #[arg(allow_negative_numbers = true)]
        value: f32,
    },
    /// Select a saved prompt by name
    Select { name: String },
    /// Save a prompt; opens $EDITOR when --content is omitted
    Save {
        name: String,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a saved prompt (defaults to the selected one)
    Delete { name: Option<String> },
    /// Show the prompt library
    List,
    /// Show the current settings
    Settings,
    /// List the models that can be picked
    Models,
}
