use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::config::MarketplaceConfig;
use crate::generator::extract::extract_identifier;
use crate::models::{AnalysisRecord, SentimentCounts};
use crate::report::format::{
    bar, dominant_tilt, format_number, net_sentiment_label, rating_confidence, star_row,
};
use crate::session::{history_label, History};
use crate::validate::is_marketplace_url;

/// Render a colored terminal report for one analysis.
pub fn render(record: &AnalysisRecord, quiet: bool) -> Result<()> {
    let net = record.net_sentiment();

    if quiet {
        println!(
            "{}  {:.1}/5  {}  {}",
            record.identifier,
            record.rating,
            net_label_colored(net),
            record.product_category,
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "review-radar".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Analyzing: {}\n", record.source_url);

    // Product card
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", truncate(&record.product_name, 48).bold());
    println!(
        " │  {:<48} │",
        format!("{} • ASIN {}", record.product_category, record.identifier)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{} {:.1} average • {} reviews",
            star_row(record.rating),
            record.rating,
            format_number(record.review_count)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "Confidence {}% • {}",
            rating_confidence(record.rating),
            dominant_tilt(&record.sentiment)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "Refreshed {}",
            record.created_at.format("%Y-%m-%d %H:%M UTC")
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    println!(
        " {} {}    {} {:.1} / 5    {} {}\n",
        "Net sentiment".dimmed(),
        net_label_colored(net),
        "Avg rating".dimmed(),
        record.rating,
        "Mentions / month".dimmed(),
        format_number(record.monthly_mentions),
    );

    println!(" {} Sentiment breakdown:\n", "[SENTIMENT]".cyan().bold());
    render_sentiment_table(record);
    println!("\n {}\n", record.key_takeaway.italic());

    render_list("[+]".green().bold(), "Positive signals", &record.highlights);
    render_list("[!]".yellow().bold(), "Watch-outs", &record.pain_points);
    render_list(
        "[>]".cyan().bold(),
        &format!(
            "Action plan (from {} monthly mentions)",
            format_number(record.monthly_mentions)
        ),
        &record.opportunities,
    );

    println!(" {} Performance by review theme:\n", "[THEMES]".cyan().bold());
    render_feature_table(record);
    println!();

    Ok(())
}

/// Render the recent-analysis list, newest first.
pub fn render_history(history: &History) {
    if history.is_empty() {
        return;
    }

    println!(
        " {} Recent analyses ({} of {}):\n",
        "[HISTORY]".cyan().bold(),
        history.len(),
        history.capacity()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("").add_attribute(Attribute::Bold),
            Cell::new("ASIN").add_attribute(Attribute::Bold),
            Cell::new("Product").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Rating").add_attribute(Attribute::Bold),
            Cell::new("Net").add_attribute(Attribute::Bold),
        ]);

    for (index, record) in history.entries().iter().enumerate() {
        let net = record.net_sentiment();
        table.add_row(vec![
            Cell::new(history_label(index)),
            Cell::new(&record.identifier),
            Cell::new(&record.product_name),
            Cell::new(record.product_category.to_string()),
            Cell::new(format!("{:.1}", record.rating)).set_alignment(CellAlignment::Right),
            Cell::new(net_sentiment_label(net))
                .fg(if net >= 0 { Color::Green } else { Color::Red })
                .set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}\n", table);
}

/// Render the built-in example listings with the identifier each resolves to.
pub fn render_examples(examples: &[(&str, &str)], marketplace: &MarketplaceConfig) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Example").add_attribute(Attribute::Bold),
            Cell::new("ASIN").add_attribute(Attribute::Bold),
            Cell::new("URL").add_attribute(Attribute::Bold),
            Cell::new("Accepted").add_attribute(Attribute::Bold),
        ]);

    for (label, url) in examples {
        let accepted = if is_marketplace_url(url, marketplace) {
            Cell::new("✓").fg(Color::Green)
        } else {
            Cell::new("✗").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(extract_identifier(url)).fg(Color::Cyan),
            Cell::new(url),
            accepted.set_alignment(CellAlignment::Center),
        ]);
    }

    println!("{}", table);
}

/// Render counts returned by the remote sentiment endpoint.
pub fn render_counts(counts: &SentimentCounts, comment_count: usize, quiet: bool) {
    if quiet {
        println!(
            "Comments: {}  Positive: {}  Negative: {}  Neutral: {}",
            comment_count,
            counts.positive.to_string().green(),
            counts.negative.to_string().red(),
            counts.neutral.to_string().yellow(),
        );
        return;
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SENTIMENT".bold());
    println!(
        " │  {:<48} │",
        format!("Comments sent      : {}", comment_count)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Positive        : {:>4}", "✓".green(), counts.positive)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Negative        : {:>4}", "✗".red(), counts.negative)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Neutral         : {:>4}", "•".yellow(), counts.neutral)
    );
    println!(" └────────────────────────────────────────────────────┘\n");
}

fn render_sentiment_table(record: &AnalysisRecord) {
    let s = &record.sentiment;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Tone").add_attribute(Attribute::Bold),
            Cell::new("Share").add_attribute(Attribute::Bold),
            Cell::new("").add_attribute(Attribute::Bold),
        ]);

    for (label, value, color) in [
        ("Positive", s.positive, Color::Green),
        ("Neutral", s.neutral, Color::Yellow),
        ("Negative", s.negative, Color::Red),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{}%", value)).set_alignment(CellAlignment::Right),
            Cell::new(bar(f64::from(value), 100.0, 30)).fg(color),
        ]);
    }

    println!("{}", table);
}

fn render_feature_table(record: &AnalysisRecord) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Theme").add_attribute(Attribute::Bold),
            Cell::new("Score").add_attribute(Attribute::Bold),
            Cell::new("").add_attribute(Attribute::Bold),
        ]);

    let colors = [
        Color::Cyan,
        Color::Blue,
        Color::Magenta,
        Color::DarkYellow,
        Color::Yellow,
    ];

    for (index, feature) in record.feature_scores.iter().enumerate() {
        // Bars start at 2.5, the floor of the score axis.
        table.add_row(vec![
            Cell::new(&feature.label),
            Cell::new(format!("{:.1}", feature.score)).set_alignment(CellAlignment::Right),
            Cell::new(bar(feature.score - 2.5, 2.5, 25)).fg(colors[index % colors.len()]),
        ]);
    }

    println!("{}", table);
}

fn render_list(tag: ColoredString, title: &str, items: &[String]) {
    println!(" {} {}:", tag, title);
    for item in items {
        println!("   • {}", item);
    }
    println!();
}

fn net_label_colored(net: i32) -> ColoredString {
    let label = net_sentiment_label(net);
    if net >= 0 {
        label.green()
    } else {
        label.red()
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
