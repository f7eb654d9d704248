pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Read headlines, sections and podcasts from a news content API", long_about = None)]
pub struct Cli {
    /// Results per request (overrides the configured page size)
    #[arg(short, long, global = true)]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the configured sections as headline feeds
    Headlines,
    /// List the articles of one section
    Section {
        /// Content path, e.g. "world" or "uk/technology"
        path: String,
        /// Result page to show (1-based)
        #[arg(long)]
        page: Option<u32>,
    },
    /// Search articles
    Search {
        /// Free-text search term
        term: String,
        /// Result page to show (1-based)
        #[arg(long)]
        page: Option<u32>,
    },
    /// List the podcast catalog
    Podcasts,
    /// List episodes of a podcast
    Episodes {
        /// Catalog number or title of the podcast
        podcast: String,
    },
}
