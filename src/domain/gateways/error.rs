//! Errors raised by outbound calls.

/// Failure of a single outbound call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream call timed out")]
    Timeout,

    #[error("upstream connection failed: {0}")]
    Network(String),

    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("upstream body could not be decoded: {0}")]
    Decode(String),
}
