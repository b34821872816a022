//! Search query normalization.
//!
//! Turns raw user input (business type, location, exclusion keywords, result
//! cap) into a [`SearchQuery`] the aggregator can drive without re-validating.

use crate::CoreError;

/// Records returned per search page by the provider.
pub const PAGE_SIZE: usize = 20;

/// Pages the provider serves for a single text query.
pub const MAX_PAGES: usize = 3;

/// Result language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "fr";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query sent to the provider: `"{business_type} {location}"`.
    pub text_query: String,
    pub language: String,
    /// Lowercased, trimmed, non-empty exclusion keywords.
    pub excluded_keywords: Vec<String>,
    /// Result cap, always within `1..=PAGE_SIZE * MAX_PAGES`.
    pub max_results: usize,
    /// Minimum review count; `0` disables the popularity filter.
    pub min_reviews: u32,
}

impl SearchQuery {
    /// Builds a normalized query.
    ///
    /// `max_results` is clamped to what the provider can serve for one query
    /// (`PAGE_SIZE * MAX_PAGES`) and to at least one record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyField`] if `business_type` or `location` is
    /// blank after trimming.
    pub fn new<I, S>(
        business_type: &str,
        location: &str,
        excluded_keywords: I,
        max_results: usize,
        min_reviews: u32,
        language: &str,
    ) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let business_type = business_type.trim();
        if business_type.is_empty() {
            return Err(CoreError::EmptyField("business type"));
        }
        let location = location.trim();
        if location.is_empty() {
            return Err(CoreError::EmptyField("location"));
        }

        let language = match language.trim() {
            "" => DEFAULT_LANGUAGE.to_string(),
            lang => lang.to_lowercase(),
        };

        Ok(Self {
            text_query: format!("{business_type} {location}"),
            language,
            excluded_keywords: normalize_keywords(excluded_keywords),
            max_results: max_results.clamp(1, PAGE_SIZE * MAX_PAGES),
            min_reviews,
        })
    }
}

/// Lowercases and trims every keyword, dropping blanks and repeats.
///
/// First occurrence wins so the output order follows the input.
#[must_use]
pub fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for raw in keywords {
        let kw = raw.as_ref().trim().to_lowercase();
        if !kw.is_empty() && !out.contains(&kw) {
            out.push(kw);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(max_results: usize) -> SearchQuery {
        SearchQuery::new("restaurant", "Lyon", ["KFC"], max_results, 0, "fr").unwrap()
    }

    #[test]
    fn builds_text_query_from_trimmed_parts() {
        let q = SearchQuery::new("  coiffeur ", " 69001 ", Vec::<String>::new(), 20, 0, "fr")
            .unwrap();
        assert_eq!(q.text_query, "coiffeur 69001");
    }

    #[test]
    fn rejects_blank_business_type() {
        let err = SearchQuery::new("   ", "Lyon", Vec::<String>::new(), 20, 0, "fr").unwrap_err();
        assert!(matches!(err, CoreError::EmptyField("business type")));
    }

    #[test]
    fn rejects_blank_location() {
        let err = SearchQuery::new("restaurant", "", Vec::<String>::new(), 20, 0, "fr").unwrap_err();
        assert!(matches!(err, CoreError::EmptyField("location")));
    }

    #[test]
    fn clamps_cap_to_provider_bound() {
        assert_eq!(query(500).max_results, PAGE_SIZE * MAX_PAGES);
        assert_eq!(query(0).max_results, 1);
        assert_eq!(query(35).max_results, 35);
    }

    #[test]
    fn blank_language_falls_back_to_default() {
        let q = SearchQuery::new("restaurant", "Lyon", Vec::<String>::new(), 20, 0, " ").unwrap();
        assert_eq!(q.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn normalize_keywords_lowercases_trims_and_drops_blanks() {
        let got = normalize_keywords(["  McDonald's ", "", "   ", "KFC", "kfc"]);
        assert_eq!(got, vec!["mcdonald's".to_string(), "kfc".to_string()]);
    }
}
