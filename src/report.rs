//! Assembles the four pipeline outputs into the report the transport layer
//! serializes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, info, warn};

use crate::article::Article;
use crate::environment::PipelineConfig;
use crate::hotspots::{extract_hotspots, Hotspot};
use crate::keywords::{extract_keywords, KeywordEntry};
use crate::statistics::{extract_statistics, StatisticsReport};
use crate::summary::ranking::SentenceRanker;
use crate::summary::Summarizer;
use crate::TARGET_REPORT;

pub const NO_RECENT_ARTICLES_ERROR: &str = "No recent news articles found";

/// Maximum number of image URLs echoed in a report
pub const MAX_REPORT_IMAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsReport {
    pub summary: String,
    pub articles: Vec<Article>,
    pub images: Vec<String>,
    pub statistics: StatisticsReport,
    pub trending_keywords: Vec<KeywordEntry>,
    pub geographic_hotspots: Vec<Hotspot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NewsReport {
    fn assemble(
        articles: &[Article],
        config: &PipelineConfig,
        summary: String,
        statistics: StatisticsReport,
        trending_keywords: Vec<KeywordEntry>,
        geographic_hotspots: Vec<Hotspot>,
    ) -> Self {
        let error = if articles.is_empty() {
            warn!(target: TARGET_REPORT, "Report built without any articles");
            Some(NO_RECENT_ARTICLES_ERROR.to_string())
        } else {
            None
        };

        let report = NewsReport {
            summary,
            articles: articles.iter().take(config.report_articles).cloned().collect(),
            images: images_of(articles),
            statistics,
            trending_keywords,
            geographic_hotspots,
            error,
        };
        info!(
            target: TARGET_REPORT,
            "Report ready: {} articles, {} keywords, {} hotspots",
            articles.len(),
            report.trending_keywords.len(),
            report.geographic_hotspots.len()
        );
        report
    }
}

/// Non-empty image URLs in article order
pub fn images_of(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .filter_map(|a| a.image.as_deref())
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .take(MAX_REPORT_IMAGES)
        .map(str::to_string)
        .collect()
}

fn summarizer_for(config: &PipelineConfig) -> Summarizer {
    Summarizer::new()
        .with_ranker(SentenceRanker::new().with_target_sentences(config.summary_sentences))
}

/// Runs the four extractors one after another
pub fn analyze(articles: &[Article], config: &PipelineConfig) -> NewsReport {
    debug!(target: TARGET_REPORT, "Analyzing {} articles", articles.len());
    NewsReport::assemble(
        articles,
        config,
        summarizer_for(config).summarize(articles),
        extract_statistics(articles),
        extract_keywords(articles, config.max_keywords),
        extract_hotspots(articles),
    )
}

/// Runs the four extractors on blocking worker threads and joins them.
///
/// Produces the same report as [`analyze`]; fails only if a worker panics.
pub async fn analyze_concurrently(
    articles: Arc<Vec<Article>>,
    config: PipelineConfig,
) -> Result<NewsReport> {
    debug!(
        target: TARGET_REPORT,
        "Analyzing {} articles on worker threads",
        articles.len()
    );

    let summary_task = {
        let articles = Arc::clone(&articles);
        let summarizer = summarizer_for(&config);
        task::spawn_blocking(move || summarizer.summarize(&articles))
    };
    let statistics_task = {
        let articles = Arc::clone(&articles);
        task::spawn_blocking(move || extract_statistics(&articles))
    };
    let keywords_task = {
        let articles = Arc::clone(&articles);
        let max_keywords = config.max_keywords;
        task::spawn_blocking(move || extract_keywords(&articles, max_keywords))
    };
    let hotspots_task = {
        let articles = Arc::clone(&articles);
        task::spawn_blocking(move || extract_hotspots(&articles))
    };

    let (summary, statistics, keywords, hotspots) =
        tokio::join!(summary_task, statistics_task, keywords_task, hotspots_task);

    Ok(NewsReport::assemble(
        &articles,
        &config,
        summary.context("summary worker failed")?,
        statistics.context("statistics worker failed")?,
        keywords.context("keyword worker failed")?,
        hotspots.context("hotspot worker failed")?,
    ))
}
