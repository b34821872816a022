//! Contact-page crawling for a single business.

use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::Url;

use crate::classify::{is_valid_email, select_best};
use crate::error::ScraperError;
use crate::extract::extract_candidates;

/// Paths fetched after the homepage, in order, resolved against the site root.
pub const CONTACT_PATHS: &[&str] = &[
    "/contact",
    "/contact-us",
    "/nous-contacter",
    "/contactez-nous",
    "/about",
    "/a-propos",
];

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Ordered list of pages to fetch for `website`.
///
/// The website as given comes first, then each contact path joined onto it,
/// so absolute paths land on the site root. Anything not starting with `http`
/// yields no pages; a website that does not parse as a URL yields only itself.
#[must_use]
pub fn candidate_pages(website: &str) -> Vec<String> {
    let website = website.trim();
    if !website.starts_with("http") {
        return Vec::new();
    }

    let mut pages = Vec::with_capacity(CONTACT_PATHS.len() + 1);
    pages.push(website.to_string());
    match Url::parse(website) {
        Ok(base) => pages.extend(
            CONTACT_PATHS
                .iter()
                .filter_map(|path| base.join(path).ok())
                .map(String::from),
        ),
        Err(e) => {
            tracing::debug!(website, error = %e, "website is not a valid URL; fetching it alone");
        }
    }
    pages
}

/// Best valid address on a single page, if any.
#[must_use]
pub fn best_email_in_page(html: &str) -> Option<String> {
    let valid: BTreeSet<String> = extract_candidates(html)
        .into_iter()
        .map(|c| c.address)
        .filter(|address| is_valid_email(address))
        .collect();
    select_best(valid.iter().map(String::as_str)).map(str::to_owned)
}

/// Fetches business websites with browser-like headers and picks a contact
/// address from them.
#[derive(Debug, Clone)]
pub struct EmailDiscoverer {
    client: reqwest::Client,
}

impl EmailDiscoverer {
    /// Creates a discoverer whose requests each time out after `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying HTTP client cannot be
    /// built, or [`ScraperError::InvalidHeader`] if `accept_language` is not
    /// a legal header value.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        accept_language: &str,
    ) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(HTML_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(accept_language).map_err(|e| ScraperError::InvalidHeader {
                name: "Accept-Language",
                reason: e.to_string(),
            })?,
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches the homepage then each contact path, stopping at the first page
    /// that yields a valid address.
    ///
    /// Never fails: unreachable pages, error statuses and non-HTML bodies are
    /// skipped. Returns `None` when no page yields anything.
    pub async fn discover(&self, website: &str) -> Option<String> {
        let pages = candidate_pages(website);
        if pages.is_empty() {
            tracing::debug!(website, "website is not an http(s) URL; skipping email discovery");
            return None;
        }

        for url in &pages {
            let Some(html) = self.fetch_html(url).await else {
                continue;
            };
            if let Some(email) = best_email_in_page(&html) {
                tracing::debug!(website, url, email = %email, "found contact email");
                return Some(email);
            }
        }

        tracing::debug!(website, pages = pages.len(), "no contact email found");
        None
    }

    /// Body of `url` when it answers 2xx with an HTML content type.
    async fn fetch_html(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(url, error = %e, "page fetch failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "page returned non-success status");
            return None;
        }

        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("text/html"));
        if !is_html {
            tracing::debug!(url, "page is not HTML; skipping");
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!(url, error = %e, "failed to read page body");
                None
            }
        }
    }
}
