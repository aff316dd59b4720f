use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, ValueHint};
use gridcells::grid::{Dataset, GridContext};
use tracing::info;

use crate::config::get_config_path;

mod action;
mod app;
mod cli;
mod components;
mod config;
mod logging;
mod panic;
mod tui;
mod utils;
mod widgets;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    panic::init()?;

    // Enhance the help message for the config argument
    let help = match get_config_path() {
        Ok(def) => format!("Path to config file (default: {})", def.display()),
        Err(_) => "Path to config file".to_string(),
    };
    let cmd = cli::Args::command()
        .mut_arg("config", |a| a.help(help).value_hint(ValueHint::FilePath).next_line_help(true));
    let args = cli::Args::from_arg_matches(&cmd.get_matches())?;

    let config = config::Config::new(args.config)?;
    logging::init(&config)?;

    let dataset = match &args.data {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("Fail to load dataset `{}`", path.display()))?,
        None => Dataset::mock(
            args.rows.unwrap_or(config.mock_rows),
            args.seed.unwrap_or(config.mock_seed),
        ),
    };
    info!("dataset `{}`: {} columns, {} rows", dataset.title(), dataset.columns.len(), dataset.rows.len());

    let grid = GridContext::new().with_translations(config.translations.clone());
    let mut app = app::App::new(config, dataset, grid)?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    app.run().await?;

    Ok(())
}
