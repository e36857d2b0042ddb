//! CLI module for BlogCrafter
//!
//! Runs the same validation and request code as the GUI, for scripts and
//! terminals. With no subcommand the binary opens the GUI instead.

mod commands;
mod output;

use clap::{Parser, Subcommand};

use output::OutputFormat;

pub use output::print_error;

/// BlogCrafter - blog post generator
#[derive(Parser, Debug)]
#[command(name = "blogcrafter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    /// Run a command instead of opening the window
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a blog post and print it
    Generate(commands::generate::GenerateArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a parsed subcommand
pub async fn run(command: Commands, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Generate(args) => commands::generate::run(args, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
    }
}
