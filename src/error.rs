//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// `true` when retrying the same request cannot succeed (client-side 4xx).
    pub fn is_terminal(&self) -> bool {
        match self {
            SdkError::Api(e) => e.is_terminal(),
            _ => true,
        }
    }
}

/// Errors produced by one request/response exchange with a Lemmy instance.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure (negative `code`, see [`crate::network::codes`]) or a
    /// non-200 HTTP status (`code` is the status, `description` the body text).
    #[error("Network error {code}: {description}")]
    Network { code: i32, description: String },

    /// The body arrived but did not match the expected shape.
    /// `message` keeps the raw body for diagnostics.
    #[error("Decoding error: {underlying} (body: {message})")]
    Decoding {
        message: String,
        #[source]
        underlying: serde_json::Error,
    },
}

impl ApiError {
    /// The HTTP status, if this error came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network { code, .. } if (100..600).contains(code) => Some(*code as u16),
            _ => None,
        }
    }

    /// A 4xx response or a URL that could not be built: the request itself
    /// was rejected, so sending it again cannot help.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApiError::Network { code, .. }
                if (400..500).contains(code) || *code == crate::network::codes::BAD_URL
        )
    }

    #[cfg(feature = "http")]
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        use crate::network::codes;

        #[cfg(not(target_arch = "wasm32"))]
        let code = if err.is_timeout() {
            codes::TIMED_OUT
        } else if err.is_connect() {
            codes::CANNOT_CONNECT
        } else if err.is_body() || err.is_decode() {
            codes::CONNECTION_LOST
        } else if err.is_builder() {
            codes::BAD_URL
        } else {
            codes::UNKNOWN
        };
        #[cfg(target_arch = "wasm32")]
        let code = if err.is_timeout() {
            codes::TIMED_OUT
        } else if err.is_builder() {
            codes::BAD_URL
        } else {
            codes::UNKNOWN
        };

        ApiError::Network {
            code,
            description: err.to_string(),
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),
}
