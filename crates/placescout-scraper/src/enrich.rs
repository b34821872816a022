//! Batch email enrichment over a result set.

use std::time::Duration;

use placescout_core::BusinessRecord;

use crate::discover::EmailDiscoverer;

impl EmailDiscoverer {
    /// Sets `email` on every record whose website yields an address.
    ///
    /// Records without a website are left alone but still count toward
    /// progress. `on_progress(done, total)` runs after every record and
    /// `delay_ms` is slept between consecutive businesses.
    pub async fn enrich_with_emails<F>(
        &self,
        records: &mut [BusinessRecord],
        delay_ms: u64,
        mut on_progress: F,
    ) where
        F: FnMut(usize, usize),
    {
        let total = records.len();
        let mut found = 0usize;

        for (index, record) in records.iter_mut().enumerate() {
            if index > 0 && delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            if let Some(website) = record.website().map(str::to_owned) {
                let email = self.discover(&website).await;
                if email.is_some() {
                    found += 1;
                }
                record.email = email;
            }

            on_progress(index + 1, total);
        }

        tracing::info!(total, found, "email enrichment complete");
    }
}
