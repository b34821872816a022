//! Best-effort discovery of a public contact email on a business website.
//!
//! [`EmailDiscoverer::discover`] fetches the homepage and a short list of
//! contact-like paths, extracts candidates from `mailto:` anchors and from
//! the raw markup, drops technical addresses, and picks one by
//! [`classify::select_best`]. Nothing here is an RFC 5322 validator.

pub mod classify;
pub mod discover;
pub mod enrich;
pub mod error;
pub mod extract;

pub use classify::{email_priority, is_valid_email, select_best, EmailPriority};
pub use discover::{best_email_in_page, candidate_pages, EmailDiscoverer, CONTACT_PATHS};
pub use error::ScraperError;
pub use extract::{extract_candidates, EmailCandidate, EmailSource};
