//! Per-record acceptance rules applied while search pages arrive.

use crate::BusinessRecord;

/// Returns `true` if `name`, lowercased, contains any excluded keyword.
///
/// This is a plain substring match: `"kfc"` also excludes `"KFC Drive"` and
/// `"SuperKFCs"`. `excluded` is expected to be normalized already
/// (see [`crate::normalize_keywords`]).
#[must_use]
pub fn is_excluded(name: &str, excluded: &[String]) -> bool {
    let name = name.to_lowercase();
    excluded.iter().any(|kw| name.contains(kw.as_str()))
}

/// Decides whether a record survives the name-exclusion and popularity filters.
///
/// A `min_reviews` of `0` disables the popularity filter; otherwise a record
/// with fewer reviews (absent counts as zero) is rejected.
#[must_use]
pub fn accept(record: &BusinessRecord, excluded: &[String], min_reviews: u32) -> bool {
    if is_excluded(&record.name, excluded) {
        return false;
    }
    !(min_reviews > 0 && record.reviews() < min_reviews)
}
