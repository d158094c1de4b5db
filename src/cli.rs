use clap::{Parser, Subcommand};

/// Debug CLI for fetching and aggregating page data
#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "A CLI tool for fetching and aggregating news page data", long_about = None)]
pub struct Cli {
    /// Override the content-data service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one page-data document
    Fetch {
        /// Request path, e.g. /news/world-12345678.json
        path: String,
    },
    /// Fetch a page and its supplementary sources
    Additional {
        /// Request path of the page-data document
        path: String,
        /// Content service, e.g. news
        #[arg(short, long)]
        service: String,
        /// Language/region variant, e.g. simp
        #[arg(short, long)]
        variant: Option<String>,
    },
}
