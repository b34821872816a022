//! The aggregated business record and its operating status.

use serde::{Deserialize, Serialize};

/// Operating status reported by the places provider.
///
/// Unknown tokens (including the provider's own `BUSINESS_STATUS_UNSPECIFIED`)
/// deserialize to [`BusinessStatus::Unspecified`] rather than failing the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    #[serde(other)]
    Unspecified,
}

impl BusinessStatus {
    /// The provider's wire token for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BusinessStatus::Operational => "OPERATIONAL",
            BusinessStatus::ClosedTemporarily => "CLOSED_TEMPORARILY",
            BusinessStatus::ClosedPermanently => "CLOSED_PERMANENTLY",
            BusinessStatus::Unspecified => "BUSINESS_STATUS_UNSPECIFIED",
        }
    }
}

impl std::fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One business as seen by the aggregation pipeline.
///
/// Created from a search page, then overwritten field by field by the detail
/// enricher and finally given an `email` by contact discovery. `id` is the
/// deduplication key and is unique within a result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub national_phone: Option<String>,
    #[serde(default)]
    pub international_phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Average rating, 0–5.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of user reviews; the popularity signal used by the filter.
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub status: Option<BusinessStatus>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Public contact address found on the business website, if any.
    #[serde(default)]
    pub email: Option<String>,
}

impl BusinessRecord {
    /// Creates a record with only its identifier and display name set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// National phone number, falling back to the international one.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        non_empty(self.national_phone.as_deref())
            .or_else(|| non_empty(self.international_phone.as_deref()))
    }

    /// Website URL when present and non-blank.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        non_empty(self.website.as_deref())
    }

    /// Review count with an absent value treated as zero.
    #[must_use]
    pub fn reviews(&self) -> u32 {
        self.review_count.unwrap_or(0)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
