pub mod app;
pub mod cli;
pub mod command;
pub mod core;
pub mod store;

use crate::app::App;
use crate::core::config::AppConfig;
use crate::store::JsonFileStorage;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    match config_path {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    }
}

/// Runs the interactive shell on the terminal.
pub fn run(config_path: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    run_with_io(config_path, stdin.lock(), io::stdout())
}

/// Runs the shell against arbitrary input and output streams.
pub fn run_with_io<R: BufRead, W: Write>(config_path: Option<&str>, input: R, output: W) -> Result<()> {
    info!("Homerce starting...");

    let config = load_config(config_path)?;
    debug!("Loaded config: {config:#?}");

    let data_file = config.data_file()?;
    let storage = JsonFileStorage::new(&data_file);
    let mut app = App::load(storage, config.sample_data)
        .with_context(|| format!("Failed to load data file: {}", data_file.display()))?;

    cli::shell::run_shell(&mut app, &config.currency, input, output)?;
    info!("Homerce exiting");
    Ok(())
}
