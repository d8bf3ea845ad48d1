pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ceylon-fav")]
#[command(about = "Check and toggle marketplace favorites", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/ceylon-fav/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Resource family the item ids belong to
    #[arg(short, long, default_value = "destination", global = true)]
    pub resource: String,

    /// Signed-in user id
    #[arg(long, env = "CEYLON_FAV_USER", global = true)]
    pub user: Option<String>,

    /// Bearer token of the signed-in user
    #[arg(long, env = "CEYLON_FAV_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether items are favorited
    Check {
        /// Item ids to check
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Flip the favorite flag of an item
    Toggle {
        /// Item id to toggle
        item: String,
    },
    /// List configured resource families
    Resources,
}
