pub mod article;
pub mod environment;
pub mod extraction;
pub mod hotspots;
pub mod keywords;
pub mod logging;
pub mod report;
pub mod statistics;
pub mod summary;
pub mod text;

pub use article::Article;
pub use extraction::{Extraction, FallbackReason};
pub use hotspots::{extract_hotspots, Hotspot};
pub use keywords::{extract_keywords, KeywordEntry};
pub use report::NewsReport;
pub use statistics::{extract_statistics, StatisticsReport};
pub use summary::rank_and_summarize;

pub const TARGET_SUMMARY: &str = "summary";
pub const TARGET_STATISTICS: &str = "statistics";
pub const TARGET_KEYWORDS: &str = "keywords";
pub const TARGET_HOTSPOTS: &str = "hotspots";
pub const TARGET_REPORT: &str = "report";
