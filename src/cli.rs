use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "review-radar",
    about = "Turn marketplace product URLs into review-insight reports",
    version
)]
pub struct Cli {
    /// Config file [default: ./.review-radar/config.toml, fallback ~/.config/review-radar/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print summary lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze product URLs in order; the last accepted one is reported
    Analyze {
        /// Product detail page URLs [default: a sample listing]
        urls: Vec<String>,

        /// Report format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        report: ReportFormat,

        /// Number of recent analyses to keep (overrides config)
        #[arg(long, value_name = "N")]
        history: Option<usize>,
    },

    /// List the built-in example listings
    Examples,

    /// Post comments scraped from a saved HTML page to a sentiment endpoint
    Sentiment {
        /// Saved product page
        html: PathBuf,

        /// Sentiment endpoint URL (overrides config)
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Report format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        report: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
