//! Candidate email extraction from page markup.
//!
//! Two independent passes run over the same page: `mailto:` links from the
//! parsed document, and a free-text scan of the raw markup for the
//! `local@domain.tld` shape. Neither pass validates; see
//! [`crate::classify::is_valid_email`].

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid link selector"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}").expect("valid email regex")
});

const MAILTO_SCHEME: &str = "mailto:";

/// Where a candidate address was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailSource {
    MailtoAnchor,
    TextPattern,
}

/// A raw, unvalidated address pulled from a page. Always lowercase and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCandidate {
    pub address: String,
    pub source: EmailSource,
}

/// Runs both extraction passes, anchors first.
#[must_use]
pub fn extract_candidates(html: &str) -> Vec<EmailCandidate> {
    let mut candidates = mailto_candidates(html);
    candidates.extend(pattern_candidates(html));
    candidates
}

/// Addresses from every `<a href="mailto:...">`, scheme matched case-insensitively.
///
/// The `href` value is read after HTML parsing, so character references are
/// already decoded. The address is everything after the scheme up to an
/// optional `?`.
#[must_use]
pub fn mailto_candidates(html: &str) -> Vec<EmailCandidate> {
    let document = Html::parse_document(html);
    document
        .select(&LINK_SELECTOR)
        .filter_map(|link| link.value().attr("href"))
        .filter_map(mailto_address)
        .map(|address| EmailCandidate {
            address,
            source: EmailSource::MailtoAnchor,
        })
        .collect()
}

/// Addresses matching the email shape anywhere in the markup.
#[must_use]
pub fn pattern_candidates(html: &str) -> Vec<EmailCandidate> {
    EMAIL_RE
        .find_iter(html)
        .map(|m| EmailCandidate {
            address: m.as_str().trim().to_lowercase(),
            source: EmailSource::TextPattern,
        })
        .collect()
}

fn mailto_address(href: &str) -> Option<String> {
    let href = href.trim();
    let scheme = href.get(..MAILTO_SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(MAILTO_SCHEME) {
        return None;
    }
    let rest = &href[MAILTO_SCHEME.len()..];
    let address = rest.split('?').next().unwrap_or(rest).trim().to_lowercase();
    Some(address)
}
