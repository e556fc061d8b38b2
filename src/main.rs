//! `review-radar`: turn marketplace product URLs into deterministic review-insight reports.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up logging.
//! 2. Load config ([`config::load_config`]).
//! 3. `analyze`: feed each URL through a [`session::Session`], which validates it
//!    ([`validate`]), runs the [`generator`], and keeps the bounded history.
//! 4. Render the requested report ([`report`]).
//! 5. `sentiment`: scrape comments from a saved page and post them to the
//!    configured endpoint ([`sentiment`]).
//! 6. Exit `0`, or `1` when any `analyze` input was rejected.

mod cli;
mod config;
mod errors;
mod generator;
mod models;
mod report;
mod sentiment;
mod session;
mod validate;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command, ReportFormat};
use config::{load_config, Config};
use report::json::{session_document, RejectedInput};
use sentiment::client::SentimentClient;
use sentiment::scrape::scrape_comments;
use session::{Session, EXAMPLE_URLS, SAMPLE_URL};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        Command::Analyze {
            urls,
            report,
            history,
        } => {
            let capacity = history.unwrap_or(config.history.capacity);
            let all_accepted = run_analyze(&urls, report, capacity, &config, cli.quiet)?;
            if !all_accepted {
                std::process::exit(1);
            }
        }
        Command::Examples => {
            report::terminal::render_examples(&EXAMPLE_URLS, &config.marketplace);
        }
        Command::Sentiment {
            html,
            endpoint,
            report,
        } => {
            let endpoint = endpoint.unwrap_or_else(|| config.sentiment.endpoint.clone());
            run_sentiment(&html, &endpoint, &config, report, cli.quiet).await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so JSON reports on stdout stay parseable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "review_radar=debug"
    } else {
        "review_radar=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Returns `false` when at least one input was rejected.
fn run_analyze(
    urls: &[String],
    report: ReportFormat,
    capacity: usize,
    config: &Config,
    quiet: bool,
) -> Result<bool> {
    let mut rejected = Vec::new();

    let session = if urls.is_empty() {
        Session::seeded(SAMPLE_URL, capacity)
    } else {
        let mut session = Session::new(capacity);
        for url in urls {
            session = session.submit(url, &config.marketplace);

            match (&session.error, &session.current) {
                (Some(message), _) => {
                    eprintln!("  {} {} {}", "✗".red(), url, message.as_str().red());
                    rejected.push(RejectedInput {
                        input: url.clone(),
                        message: message.clone(),
                    });
                }
                (None, Some(current)) if !quiet => {
                    eprintln!(
                        "  {} {} {}",
                        "→".cyan(),
                        current.identifier,
                        current.product_name
                    );
                }
                _ => {}
            }
        }
        session
    };

    match report {
        ReportFormat::Terminal => match &session.current {
            Some(current) => {
                report::terminal::render(current, quiet)?;
                if !quiet {
                    report::terminal::render_history(&session.history);
                }
            }
            None => eprintln!("No analysis produced."),
        },
        ReportFormat::Json => {
            println!("{}", session_document(&session, &rejected)?);
        }
    }

    Ok(rejected.is_empty())
}

async fn run_sentiment(
    html_path: &Path,
    endpoint: &str,
    config: &Config,
    report: ReportFormat,
    quiet: bool,
) -> Result<()> {
    let html = std::fs::read_to_string(html_path)
        .with_context(|| format!("reading {}", html_path.display()))?;
    let comments = scrape_comments(&html);

    if comments.is_empty() {
        println!("No comments detected.");
        return Ok(());
    }

    if !quiet {
        eprintln!(
            "  {} {} comments from {}",
            "→".cyan(),
            comments.len(),
            html_path.display()
        );
    }

    let client = SentimentClient::new(
        endpoint,
        Duration::from_secs(config.sentiment.timeout_secs),
    )?;

    let spinner = if !quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!("Querying {}", client.endpoint()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = client.classify(&comments).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let counts = result?;

    match report {
        ReportFormat::Terminal => report::terminal::render_counts(&counts, comments.len(), quiet),
        ReportFormat::Json => {
            let doc = serde_json::json!({
                "comments": comments.len(),
                "counts": counts,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}
