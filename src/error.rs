#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("Request error")]
    Request(#[from] reqwest::Error),
    #[error("Io error")]
    Io(#[from] std::io::Error),
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}
