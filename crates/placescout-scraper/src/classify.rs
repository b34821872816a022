//! Validation and ranking of candidate addresses.
//!
//! The lists below are fixed at compile time. Matching is substring-based;
//! nothing here checks deliverability.

/// Local-part tokens marking an address as generic rather than business-specific.
pub const GENERIC_PREFIXES: &[&str] = &[
    "noreply",
    "no-reply",
    "donotreply",
    "do-not-reply",
    "postmaster",
    "mailer-daemon",
    "bounce",
    "webmaster",
];

/// Domain fragments that never belong to a business's own inbox. Includes the
/// retina image suffixes the text scan mistakes for domains.
pub const BLACKLISTED_DOMAINS: &[&str] = &[
    "sentry.io",
    "example.com",
    "test.com",
    "wixpress.com",
    "amazonaws.com",
    "cloudflare.com",
    "google.com",
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "linkedin.com",
    "2x.png",
    "3x.png",
];

/// Asset extensions that end up looking like a TLD after the text scan.
pub const FAKE_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".gif", ".svg", ".js", ".css", ".woff", ".ttf",
];

/// Ranking bucket for a valid address. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmailPriority {
    BusinessSpecific = 0,
    Generic = 1,
}

/// Returns `true` if `address` plausibly is a business contact address.
///
/// Rejects: no `@` or empty local part, a domain ending in an asset
/// extension, a domain containing a blacklisted fragment, a domain without
/// a dot.
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    let address = address.trim().to_lowercase();
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    if FAKE_EXTENSIONS.iter().any(|ext| domain.ends_with(ext)) {
        return false;
    }
    if BLACKLISTED_DOMAINS.iter().any(|bl| domain.contains(bl)) {
        return false;
    }
    domain.contains('.')
}

#[must_use]
pub fn email_priority(address: &str) -> EmailPriority {
    let local = address
        .split('@')
        .next()
        .unwrap_or(address)
        .to_lowercase();
    if GENERIC_PREFIXES.iter().any(|g| local.contains(g)) {
        EmailPriority::Generic
    } else {
        EmailPriority::BusinessSpecific
    }
}

/// Picks the lexicographically-first address of the best priority bucket.
#[must_use]
pub fn select_best<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .min_by_key(|address| (email_priority(address), *address))
}
