use clap::Parser;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use writing9_crawler::config::Config;
use writing9_crawler::dump::EssayDump;
use writing9_crawler::fetch::HttpFetcher;
use writing9_crawler::run_crawl;
use writing9_crawler::writing9::Writing9Scraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "debug,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let config = Config::parse();
    let scraper = Writing9Scraper::with_thresholds(
        &config.origin,
        config.min_body_len,
        config.min_paragraph_len,
    );
    let mut dump = EssayDump::new(&config.output);

    info!(
        "Scraping listing pages {}..{} from {}",
        config.page_start, config.page_end, config.base_url
    );
    run_crawl(&HttpFetcher, &scraper, &config, &mut dump).await?;

    dump.persist()?;
    info!(
        "Done: {} essays saved to {}",
        dump.len(),
        config.output.display()
    );
    Ok(())
}
