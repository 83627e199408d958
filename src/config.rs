use clap::Parser;
use std::path::PathBuf;

/// Crawl settings. Defaults reproduce a short test run over the first three
/// listing pages; raise `--page-end` for a full harvest.
#[derive(Debug, Parser)]
#[command(name = "writing9-crawler")]
pub struct Config {
    /// First listing page number (inclusive)
    #[arg(long, default_value_t = 1)]
    pub page_start: u32,

    /// Listing page number to stop at (exclusive)
    #[arg(long, default_value_t = 4)]
    pub page_end: u32,

    /// Minimum model-answer length (chars) for a record to be kept
    #[arg(long, default_value_t = 200)]
    pub min_body_len: usize,

    /// Minimum paragraph length (chars) considered by the fallback extractor
    #[arg(long, default_value_t = 50)]
    pub min_paragraph_len: usize,

    /// Lower bound of the politeness delay between detail fetches
    #[arg(long, default_value_t = 500)]
    pub delay_min_ms: u64,

    /// Upper bound of the politeness delay between detail fetches
    #[arg(long, default_value_t = 1500)]
    pub delay_max_ms: u64,

    /// Output dump path
    #[arg(long, default_value = "data/writing9_dump.json")]
    pub output: PathBuf,

    /// Listing endpoint, paginated with `?page={n}`
    #[arg(long, default_value = "https://writing9.com/ielts-writing-task-2")]
    pub base_url: String,

    /// Origin prefixed to relative detail links
    #[arg(long, default_value = "https://writing9.com")]
    pub origin: String,
}
