//! Error codes and the request-boundary error type.
//!
//! Every failure the service can report is identified by a stable
//! [`ErrorCode`] string on the wire. Clients map these codes to user-facing
//! messages, so the serialized names must never change.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::response::JsonBody;
use crate::domain::gateways::UpstreamError;

/// Stable error codes emitted in the `error` field of every JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MissingUrl,
    InvalidUrlEncoding,
    InvalidUrl,
    NotShopeeShortUrl,
    Timeout,
    NetworkError,
    ProviderError,
    ShortenFailed,
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingUrl => "missing_url",
            Self::InvalidUrlEncoding => "invalid_url_encoding",
            Self::InvalidUrl => "invalid_url",
            Self::NotShopeeShortUrl => "not_shopee_short_url",
            Self::Timeout => "timeout",
            Self::NetworkError => "network_error",
            Self::ProviderError => "provider_error",
            Self::ShortenFailed => "shorten_failed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure returned directly as an error envelope.
///
/// Resolution failures after input validation are not represented here: they
/// travel inside a [`crate::domain::ResolutionResult`] so the client still
/// receives the full result shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("query parameter `url` is missing")]
    MissingUrl,

    #[error("query parameter `url` is not valid percent-encoding")]
    InvalidUrlEncoding,

    #[error("upstream call exceeded the deadline")]
    Timeout,

    #[error("upstream network error: {0}")]
    Network(String),

    #[error("shortening provider responded with status {status}")]
    Provider { status: u16 },

    #[error("shortening provider returned no link")]
    ShortenFailed,
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingUrl => ErrorCode::MissingUrl,
            Self::InvalidUrlEncoding => ErrorCode::InvalidUrlEncoding,
            Self::Timeout => ErrorCode::Timeout,
            Self::Network(_) => ErrorCode::NetworkError,
            Self::Provider { .. } => ErrorCode::ProviderError,
            Self::ShortenFailed => ErrorCode::ShortenFailed,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingUrl | Self::InvalidUrlEncoding => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Network(_) | Self::Provider { .. } | Self::ShortenFailed => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Converts the error into its serializable envelope.
    pub fn to_body(&self) -> ErrorBody {
        let (status, message) = match self {
            Self::MissingUrl => (None, Some("Use ?url=...")),
            Self::Provider { status } => (Some(*status), None),
            Self::ShortenFailed => (None, Some("No link returned")),
            _ => (None, None),
        };

        ErrorBody {
            error: self.code(),
            status,
            message,
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Timeout => Self::Timeout,
            UpstreamError::Status(status) => Self::Provider { status },
            UpstreamError::Network(reason) | UpstreamError::Decode(reason) => {
                Self::Network(reason)
            }
        }
    }
}

/// JSON error envelope: `{"error": <code>, "status"?: <upstream>, "message"?: <hint>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorCode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Network(reason) => tracing::warn!(code = %self.code(), %reason, "request failed"),
            _ => tracing::debug!(code = %self.code(), "request failed"),
        }

        (self.status(), JsonBody(self.to_body())).into_response()
    }
}
