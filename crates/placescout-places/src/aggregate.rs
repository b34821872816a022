//! Multi-page search aggregation for `PlacesClient`.

use std::collections::HashSet;
use std::time::Duration;

use placescout_core::{accept, BusinessRecord, SearchQuery, MAX_PAGES, PAGE_SIZE};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::Place;

/// Paging and pacing limits for [`PlacesClient::search_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Records requested per page.
    pub page_size: usize,
    /// Hard ceiling on page requests per aggregation.
    pub max_pages: usize,
    /// Delay before every page request except the first.
    pub inter_page_delay_ms: u64,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_pages: MAX_PAGES,
            inter_page_delay_ms: 300,
        }
    }
}

impl PaginationOptions {
    /// Largest result set these limits can produce.
    #[must_use]
    pub fn max_records(&self) -> usize {
        self.page_size.saturating_mul(self.max_pages)
    }
}

impl PlacesClient {
    /// Runs a text search across pages and returns the filtered, deduplicated
    /// records in provider order.
    ///
    /// Pages are requested while fewer than the cap have been accepted, a
    /// continuation token exists, and the previous page was non-empty. The cap
    /// is `query.max_results`, bounded by [`PaginationOptions::max_records`].
    /// Filtered records never count toward the cap.
    ///
    /// **Fail-fast**: any page failure discards everything accepted so far and
    /// returns the error. There is no retry.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::search_text`].
    pub async fn search_all(
        &self,
        query: &SearchQuery,
        options: PaginationOptions,
    ) -> Result<Vec<BusinessRecord>, PlacesError> {
        let cap = query.max_results.min(options.max_records());
        let mut results: Vec<BusinessRecord> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        while results.len() < cap && page_count < options.max_pages {
            if page_count > 0 && options.inter_page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(options.inter_page_delay_ms)).await;
            }
            page_count += 1;

            let page = self
                .search_text(
                    &query.text_query,
                    &query.language,
                    options.page_size,
                    page_token.as_deref(),
                )
                .await?;

            page_token = page.continuation().map(str::to_owned);
            let returned = page.places.len();
            let accepted = absorb_page(page.places, query, &mut seen, &mut results);

            tracing::info!(
                page = page_count,
                returned,
                accepted,
                total = results.len(),
                has_more = page_token.is_some(),
                "search page aggregated"
            );

            if page_token.is_none() || returned == 0 {
                break;
            }
        }

        results.truncate(cap);
        Ok(results)
    }
}

/// Filters and deduplicates one page into `results`, returning how many
/// records were accepted.
///
/// A record is only marked as seen once it passes the filter, so a rejected
/// identifier does not shadow a later occurrence.
pub(crate) fn absorb_page(
    places: Vec<Place>,
    query: &SearchQuery,
    seen: &mut HashSet<String>,
    results: &mut Vec<BusinessRecord>,
) -> usize {
    let mut accepted = 0usize;
    for place in places {
        let Some(record) = place.into_record() else {
            tracing::debug!("skipping place without id");
            continue;
        };
        if seen.contains(&record.id) {
            continue;
        }
        if !accept(&record, &query.excluded_keywords, query.min_reviews) {
            tracing::debug!(place_id = %record.id, name = %record.name, "place filtered out");
            continue;
        }
        seen.insert(record.id.clone());
        results.push(record);
        accepted += 1;
    }
    accepted
}
