use clap::{Parser, Subcommand};

use crate::domain::Category;

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "News reader with a persistent, rate-limited fetch cache")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show top headlines for a category
    Headlines {
        /// Category to browse
        #[arg(short, long, value_enum, default_value_t = Category::General)]
        category: Category,

        /// Refetch even if the cached entry is still fresh
        #[arg(long)]
        refresh: bool,
    },

    /// Search news by free-text term
    Search {
        /// Search term
        term: String,

        /// Refetch even if the cached entry is still fresh
        #[arg(long)]
        refresh: bool,
    },

    /// List available categories
    Categories,

    /// Show cached queries and their ages
    Cache {
        /// Delete the cache snapshot
        #[arg(long)]
        clear: bool,
    },
}
