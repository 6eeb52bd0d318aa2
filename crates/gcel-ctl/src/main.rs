use clap::Parser;
use tracing::debug;

use gcel_observe::{LoggerConfig, init_logger};

mod cli;
mod commands;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = LoggerConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
        ..Default::default()
    };
    init_logger(&cfg)?;
    debug!(command = ?cli.command, "starting");

    let out = commands::run(&cli.command)?;
    println!("{out}");
    Ok(())
}
