use thiserror::Error;

/// Errors returned by the places API client.
///
/// The `Display` output names the failure class so callers can tell a
/// rejected request from an unreachable provider.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Connection, TLS, or timeout failure from the underlying HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Places API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl PlacesError {
    /// `true` for transport-level failures (no HTTP response was received).
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, PlacesError::Network(_))
    }
}
