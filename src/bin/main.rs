use anyhow::Context;
use clap::Parser;
use pattern_catalog::cli::{self, Cli};
use pattern_catalog::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load catalog config")?;

    logging::init(&config.log_level, cli.verbose);
    tracing::debug!(?config, "catalog config");

    let stdout = std::io::stdout();
    cli::execute(&cli.action, &config, &mut stdout.lock())?;
    Ok(())
}
