//! Error types for the memo client
//!
//! Only transport-level failures reach the user. Section decode problems never
//! get here; the normalizer absorbs them.

use crate::session::RequestId;

/// Memo client error
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Ticker was blank after trimming
    #[error("ticker is required (got {0:?})")]
    InvalidTicker(String),

    /// Request could not be built, sent, or read
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Endpoint URL
        url: String,
        /// Underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// Generator answered with a non-success status
    #[error("{url} returned {status}: {body}")]
    Status {
        /// Endpoint URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Response body was not a memo payload
    #[error("could not decode memo from {url}: {source}")]
    Decode {
        /// Endpoint URL
        url: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client construction failed
    #[error("client configuration error: {0}")]
    Config(String),

    /// A newer request was issued before this response arrived
    #[error("request {request} superseded by request {latest}")]
    Superseded {
        /// The stale request
        request: RequestId,
        /// The latest request at the time the response arrived
        latest: RequestId,
    },
}

impl ClientError {
    /// Create transport error for url
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create decode error for url
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Check if retrying the same request may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Decode { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::InvalidTicker(_) | Self::Config(_) | Self::Superseded { .. } => false,
        }
    }

    /// Check if the failure should be shown to the user as a failure notice
    ///
    /// A superseded response is not a failure; the newer request owns the view.
    #[inline]
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::Superseded { .. })
    }
}
