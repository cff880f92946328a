use anyhow::{Context, Result};
use clap::Parser;

use phonestock_cli::{Cli, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    phonestock_observability::init(&cli.log_config());

    tracing::info!("starting inventory console");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(stdin, stdout);
    session.run().context("console session failed")?;

    tracing::info!(phones = session.manager().len(), "inventory console closed");
    Ok(())
}
