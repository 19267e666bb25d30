use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use prettytable::{Cell, Row, Table};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use flashpoint::article::{retain_recent, Article};
use flashpoint::environment::PipelineConfig;
use flashpoint::report::{analyze_concurrently, NewsReport};
use flashpoint::TARGET_REPORT;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser)]
#[clap(
    name = "flashpoint",
    about = "Summarize, count, and map a batch of conflict news articles"
)]
struct Cli {
    /// JSON file holding an array of articles
    #[clap(required = true)]
    input: PathBuf,

    /// Maximum number of trending keywords
    #[clap(short = 'k', long)]
    max_keywords: Option<usize>,

    /// Number of top-ranked sentences fed into the summary
    #[clap(short = 's', long)]
    summary_sentences: Option<usize>,

    /// Output format
    #[clap(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Drop articles published more than this many days ago
    #[clap(short = 'd', long)]
    max_age_days: Option<i64>,

    /// Number of articles echoed in the report
    #[clap(short = 'n', long)]
    report_articles: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    flashpoint::logging::configure_logging();

    let args = Cli::parse();

    let mut config = PipelineConfig::from_env();
    if let Some(max_keywords) = args.max_keywords {
        config = config.with_max_keywords(max_keywords);
    }
    if let Some(summary_sentences) = args.summary_sentences {
        config = config.with_summary_sentences(summary_sentences);
    }
    if let Some(report_articles) = args.report_articles {
        config = config.with_report_articles(report_articles);
    }
    if args.max_age_days.is_some() {
        config = config.with_max_age_days(args.max_age_days);
    }

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let mut articles: Vec<Article> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse articles from {}", args.input.display()))?;
    info!(target: TARGET_REPORT, "Loaded {} articles from {}", articles.len(), args.input.display());

    if let Some(days) = config.max_age_days {
        let loaded = articles.len();
        articles = retain_recent(articles, days, Utc::now());
        if articles.len() < loaded {
            warn!(
                target: TARGET_REPORT,
                "Dropped {} articles older than {} days or undated",
                loaded - articles.len(),
                days
            );
        }
    }

    let report = analyze_concurrently(Arc::new(articles), config).await?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{}", json);
        }
        OutputFormat::Table => print_tables(&report),
    }

    Ok(())
}

fn print_tables(report: &NewsReport) {
    if let Some(error) = &report.error {
        println!("Error: {}\n", error);
    }
    println!("{}\n", report.summary);

    let stats = &report.statistics;
    let mut stats_table = Table::new();
    stats_table.add_row(Row::new(vec![Cell::new("Statistic"), Cell::new("Value")]));
    for (label, value) in [
        ("Total casualties", stats.total_casualties.to_string()),
        ("Deaths", stats.deaths.to_string()),
        ("Injuries", stats.injuries.to_string()),
        ("Military incidents", stats.military_incidents.to_string()),
        ("Diplomatic meetings", stats.diplomatic_meetings.to_string()),
        ("Border violations", stats.border_violations.to_string()),
        ("Key developments", stats.key_developments.to_string()),
        (
            "Avg casualties per incident",
            format!("{:.1}", stats.avg_casualties_per_incident),
        ),
        ("Diplomatic activity", stats.diplomatic_activity_level.to_string()),
        ("Conflict intensity", stats.conflict_intensity.to_string()),
        ("Period", stats.recent_period.clone()),
    ] {
        stats_table.add_row(Row::new(vec![Cell::new(label), Cell::new(&value)]));
    }
    stats_table.printstd();

    let mut keyword_table = Table::new();
    keyword_table.add_row(Row::new(vec![
        Cell::new("Keyword"),
        Cell::new("Weight"),
        Cell::new("Frequency"),
    ]));
    for keyword in &report.trending_keywords {
        keyword_table.add_row(Row::new(vec![
            Cell::new(&keyword.text),
            Cell::new(&format!("{:.1}", keyword.weight)),
            Cell::new(&keyword.frequency.to_string()),
        ]));
    }
    keyword_table.printstd();

    let mut hotspot_table = Table::new();
    hotspot_table.add_row(Row::new(vec![
        Cell::new("Location"),
        Cell::new("Type"),
        Cell::new("Intensity"),
        Cell::new("Incidents"),
        Cell::new("Description"),
    ]));
    for hotspot in &report.geographic_hotspots {
        hotspot_table.add_row(Row::new(vec![
            Cell::new(&hotspot.name),
            Cell::new(&hotspot.location_type.to_string()),
            Cell::new(&hotspot.intensity.to_string()),
            Cell::new(&hotspot.incidents.to_string()),
            Cell::new(&hotspot.description),
        ]));
    }
    hotspot_table.printstd();
}
