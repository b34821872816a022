//! Per-place detail enrichment for `PlacesClient`.

use std::time::Duration;

use placescout_core::BusinessRecord;

use crate::client::PlacesClient;

impl PlacesClient {
    /// Looks up each record's details and merges them over the record.
    ///
    /// The detail response is authoritative where it has a value; absent
    /// fields leave the record untouched. A failed lookup (network or API)
    /// is logged and the record kept as is, so one bad place never stops the
    /// batch. `on_progress(done, total)` runs after every record, failures
    /// included. `delay_ms` is slept between consecutive lookups.
    ///
    /// Takes the collection exclusively for the duration of the call.
    pub async fn enrich_with_details<F>(
        &self,
        records: &mut [BusinessRecord],
        language: &str,
        delay_ms: u64,
        mut on_progress: F,
    ) where
        F: FnMut(usize, usize),
    {
        let total = records.len();
        let mut merged = 0usize;

        for (index, record) in records.iter_mut().enumerate() {
            if index > 0 && delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            if record.id.is_empty() {
                tracing::debug!(name = %record.name, "record has no id; skipping detail lookup");
            } else {
                match self.get_place(&record.id, language).await {
                    Ok(place) => {
                        place.merge_into(record);
                        merged += 1;
                    }
                    Err(e) => {
                        tracing::warn!(
                            place_id = %record.id,
                            error = %e,
                            "detail lookup failed; keeping search data"
                        );
                    }
                }
            }

            on_progress(index + 1, total);
        }

        tracing::info!(total, merged, "detail enrichment complete");
    }
}
