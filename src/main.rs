use anyhow::{Result, anyhow};
use clap::Parser;
use log::LevelFilter;

use hubscout::cli::CliArgs;
use hubscout::{settings, ui};

fn main() -> Result<()> {
    let cli = CliArgs::parse();

    tui_logger::init_logger(LevelFilter::Debug)
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;
    tui_logger::set_default_level(LevelFilter::Debug);

    let settings = settings::resolve(&cli)?;
    ui::run(settings)
}
