use thiserror::Error;

/// Errors from setting up email discovery.
///
/// Failures while crawling a website are never surfaced; a page that cannot
/// be fetched is skipped.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid {name} header: {reason}")]
    InvalidHeader { name: &'static str, reason: String },
}
