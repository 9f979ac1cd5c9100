use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use underscore_pages::cli::{commands, Cli, Commands};
use underscore_pages::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    match cli.command {
        Commands::Render {
            site,
            id,
            size,
            col,
        } => {
            commands::render(&config, &site, id, size, col)?;
        }
        Commands::Expand { site, document } => {
            commands::expand(&config, &site, &document)?;
        }
        Commands::List { site } => {
            commands::list(&config, &site)?;
        }
    }

    Ok(())
}
