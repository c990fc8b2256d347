// src/main.rs

use anyhow::Result;
use clap::Parser;
use svgcombine::cli::Cli;
use svgcombine::config::ConfigBuilder;
use svgcombine::errors::Error;
use svgcombine::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    log::debug!("Starting svgcombine v{}...", env!("CARGO_PKG_VERSION"));

    // --- Configuration & Execution ---
    let cli = Cli::parse();
    let config = ConfigBuilder::from_cli(cli).build()?;
    log::debug!("Configuration built successfully: {:?}", config);

    let result = run(&config);

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::NoIconsFound => {
                eprintln!("svgcombine: No SVG icons found matching the specified criteria.");
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
