use crate::CrawlerError;
use tracing::debug;

/// Single-attempt page fetch. `Ok(None)` means the server answered with a
/// non-200 status; transport failures surface as `Err`.
#[async_trait::async_trait]
pub trait Fetch {
    async fn get(&self, url: &str) -> Result<Option<String>, CrawlerError>;
}

pub struct HttpFetcher;

#[async_trait::async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Option<String>, CrawlerError> {
        let response = reqwest::get(url).await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!("GET {} -> {}", url, status);
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }
}
