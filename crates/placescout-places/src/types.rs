//! Places API request and response types.
//!
//! ## Observed shape
//!
//! ### Field masks
//! The provider only returns the fields named in the `X-Goog-FieldMask`
//! header, so every field of [`Place`] is optional. A search page without any
//! match omits the `places` array entirely rather than sending `[]`.
//!
//! ### `displayName`
//! A localized text object, `{ "text": "Chez Paul", "languageCode": "fr" }`,
//! not a plain string.
//!
//! ### `nextPageToken`
//! Present only when another page exists. Tokens are opaque and short-lived.

use placescout_core::{BusinessRecord, BusinessStatus};
use serde::{Deserialize, Serialize};

/// JSON body for `POST places:searchText`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchTextRequest<'a> {
    pub text_query: &'a str,
    pub max_result_count: usize,
    pub language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<&'a str>,
}

/// One page of text-search results.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl SearchTextResponse {
    /// Continuation token, with a blank token treated as absent.
    #[must_use]
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// A place as returned by either the search or the detail endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub national_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<u32>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub business_status: Option<BusinessStatus>,
}

impl Place {
    /// Non-blank identifier, if any.
    #[must_use]
    pub fn place_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// Display name text, or `""` when the field was not returned.
    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name.as_ref().map_or("", |n| n.text.as_str())
    }

    /// Converts a search result into a fresh record.
    ///
    /// Returns `None` when the place has no identifier, since it could not be
    /// deduplicated or looked up later.
    #[must_use]
    pub fn into_record(self) -> Option<BusinessRecord> {
        let id = self.place_id()?.to_string();
        let mut record = BusinessRecord::new(id, self.name());
        self.merge_into(&mut record);
        Some(record)
    }

    /// Overwrites `record` with every non-empty field of this place.
    ///
    /// Fields the provider did not return leave the existing value alone.
    /// The identifier is never rewritten.
    pub fn merge_into(self, record: &mut BusinessRecord) {
        if let Some(name) = self.display_name.map(|n| n.text).and_then(non_blank) {
            record.name = name;
        }
        if let Some(address) = self.formatted_address.and_then(non_blank) {
            record.address = Some(address);
        }
        if let Some(phone) = self.national_phone_number.and_then(non_blank) {
            record.national_phone = Some(phone);
        }
        if let Some(phone) = self.international_phone_number.and_then(non_blank) {
            record.international_phone = Some(phone);
        }
        if let Some(website) = self.website_uri.and_then(non_blank) {
            record.website = Some(website);
        }
        if let Some(rating) = self.rating {
            record.rating = Some(rating);
        }
        if let Some(count) = self.user_rating_count {
            record.review_count = Some(count);
        }
        if let Some(types) = self.types.filter(|t| !t.is_empty()) {
            record.categories = types;
        }
        if let Some(status) = self.business_status {
            record.status = Some(status);
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
