// QBIC chain parameters - Entry point

mod cli;

use clap::Parser;
use cli::config::ParamsConfig;
use cli::runner::run;
use cli::Cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.verbose {
        "debug"
    } else {
        &cli.log_level
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter)),
        )
        .init();

    let config = ParamsConfig::from_args(&cli.network).map_err(|e| {
        error!("Configuration error: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let profile = qbic_chainparams::select_params(config.network)?;

    if let Err(e) = run(&cli.command, profile) {
        error!("{}", e);
        return Err(anyhow::anyhow!("{}", e));
    }

    Ok(())
}
