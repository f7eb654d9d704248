use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsdesk::app::AppContext;
use newsdesk::cli::{commands, Cli, Commands};
use newsdesk::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(page_size) = cli.page_size {
        config.api.page_size = page_size;
    }
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Headlines => {
            commands::headlines(&ctx).await?;
        }
        Commands::Section { path, page } => {
            commands::section(&ctx, &path, page).await?;
        }
        Commands::Search { term, page } => {
            commands::search(&ctx, &term, page).await?;
        }
        Commands::Podcasts => {
            commands::podcasts(&ctx)?;
        }
        Commands::Episodes { podcast } => {
            commands::episodes(&ctx, &podcast).await?;
        }
    }

    Ok(())
}
