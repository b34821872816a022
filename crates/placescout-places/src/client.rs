//! HTTP client for the places search provider.
//!
//! Wraps `reqwest` with API-key and field-mask headers and typed response
//! deserialization. Every non-2xx answer becomes [`PlacesError::Api`] with the
//! status and the provider's message; transport failures stay
//! [`PlacesError::Network`]. Nothing is retried here.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::PlacesError;
use crate::types::{Place, SearchTextRequest, SearchTextResponse};

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Fields requested from text search. Billing depends on this list.
pub(crate) const SEARCH_FIELD_MASK: &str = "places.id,places.displayName,\
places.formattedAddress,places.nationalPhoneNumber,places.websiteUri,places.rating,\
places.userRatingCount,places.types,places.businessStatus,nextPageToken";

/// Fields requested from place details.
pub(crate) const DETAIL_FIELD_MASK: &str = "id,displayName,formattedAddress,\
nationalPhoneNumber,internationalPhoneNumber,websiteUri,rating,userRatingCount,types,\
businessStatus";

/// Client for the places text-search and place-detail endpoints.
///
/// The API root comes from configuration, so production and mock servers
/// share one constructor.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client rooted at `base_url`, e.g. `https://places.googleapis.com/v1`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Network`] if the `reqwest::Client` cannot be
    /// built, or [`PlacesError::InvalidBaseUrl`] if `base_url` does not parse
    /// as a hierarchical URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("placescout/0.1 (local-business-search)")
            .build()?;

        let parsed = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            PlacesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            }
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Fetches one page of text-search results.
    ///
    /// The first page is requested with `page_token = None`; later pages pass
    /// the continuation token returned by the previous page.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] on any non-2xx status (including 429).
    /// - [`PlacesError::Network`] on connection, TLS, or timeout failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn search_text(
        &self,
        text_query: &str,
        language: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<SearchTextResponse, PlacesError> {
        let url = self.endpoint(&["places:searchText"]);
        let body = SearchTextRequest {
            text_query,
            max_result_count: page_size,
            language_code: language,
            page_token,
        };

        let request = self.client.post(url).json(&body);
        self.send_json(request, SEARCH_FIELD_MASK, &format!("searchText({text_query})"))
            .await
    }

    /// Fetches the detail record for a single place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] on any non-2xx status.
    /// - [`PlacesError::Network`] on connection, TLS, or timeout failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_place(&self, place_id: &str, language: &str) -> Result<Place, PlacesError> {
        let url = self.endpoint(&["places", place_id]);
        let request = self
            .client
            .get(url)
            .query(&[("languageCode", language)]);
        self.send_json(request, DETAIL_FIELD_MASK, &format!("place({place_id})"))
            .await
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected at construction.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Attaches auth headers, sends, and maps the response.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        field_mask: &str,
        context: &str,
    ) -> Result<T, PlacesError> {
        let response = request
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, field_mask)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body.trim().to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
