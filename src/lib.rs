use rand::Rng;
use scraper::Html;
use tokio::time::Duration;
use tracing::{debug, info, warn};

pub mod config;
pub mod dump;
pub mod fetch;
pub mod writing9;

mod error;

pub use error::CrawlerError;

use config::Config;
use dump::EssayDump;
use fetch::Fetch;
use writing9::EssayDraft;

pub trait Scraper {
    type Document;

    fn extract_links(&self, doc: &Html) -> Vec<String>;
    fn extract_document(&self, doc: &Html) -> Option<Self::Document>;
}

/// Walks the listing pages in `[page_start, page_end)` and scrapes every
/// discovered detail page, strictly in order. Fetch and extraction failures
/// are logged and skipped; only dump-write failures escalate.
pub async fn run_crawl<F, S>(
    fetcher: &F,
    scraper: &S,
    config: &Config,
    dump: &mut EssayDump,
) -> Result<(), CrawlerError>
where
    F: Fetch + Sync,
    S: Scraper<Document = EssayDraft> + Sync,
{
    for page in config.page_start..config.page_end {
        let url = format!("{}?page={}", config.base_url, page);
        debug!("Processing page {}", page);

        let listing = match fetcher.get(&url).await {
            Ok(Some(listing)) => listing,
            Ok(None) => {
                warn!("Page not loaded: {}", url);
                continue;
            }
            Err(e) => {
                warn!("Page {} processing error: {}", page, e);
                continue;
            }
        };

        let links = {
            let doc = Html::parse_document(&listing);
            scraper.extract_links(&doc)
        };
        debug!("Page {}: {} candidate links", page, links.len());

        for link in links {
            match fetcher.get(&link).await {
                Ok(Some(html)) => {
                    let draft = {
                        let doc = Html::parse_document(&html);
                        scraper.extract_document(&doc)
                    };
                    if let Some(draft) = draft {
                        if dump.append(draft, config.min_body_len)? {
                            info!("[{}] Found essay: {}", dump.len(), link);
                        }
                    }
                }
                Ok(None) => warn!("Skipped {}: page not loaded", link),
                Err(e) => warn!("Skipped {}: {}", link, e),
            }

            // Politeness delay so the site does not block us
            let delay = {
                let hi = config.delay_max_ms.max(config.delay_min_ms);
                Duration::from_millis(rand::thread_rng().gen_range(config.delay_min_ms..=hi))
            };
            tokio::time::sleep(delay).await;
        }
    }

    Ok(())
}
