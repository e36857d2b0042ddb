mod app;
mod cli;
mod clipboard;
mod config;
mod form;
mod service;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so CLI output stays pipeable
    let default_filter = if cli.output.verbose {
        "blogcrafter=debug,info"
    } else if cli.command.is_some() {
        "blogcrafter=warn"
    } else {
        "blogcrafter=debug,info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(command) = cli.command {
        if let Err(e) = cli::run(command, &cli.output).await {
            cli::print_error(&e.to_string());
            std::process::exit(1);
        }
        return Ok(());
    }

    tracing::info!("Starting BlogCrafter");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1000.0, 680.0])
        .with_min_inner_size([720.0, 480.0])
        .with_title("BlogCrafter");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "BlogCrafter",
        native_options,
        Box::new(|cc| Ok(Box::new(app::BlogCrafterApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
