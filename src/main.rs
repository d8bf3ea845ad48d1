use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ceylon_fav::app::AppContext;
use ceylon_fav::cli::{commands, Cli, Commands};
use ceylon_fav::domain::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let session = Session::from_parts(cli.user, cli.token);
    let ctx = AppContext::new(cli.config.as_deref(), session)?;

    match cli.command {
        Commands::Check { items } => {
            commands::check_items(&ctx, &cli.resource, &items).await?;
        }
        Commands::Toggle { item } => {
            commands::toggle_item(&ctx, &cli.resource, &item).await?;
        }
        Commands::Resources => {
            commands::list_resources(&ctx)?;
        }
    }

    Ok(())
}
