//! Deadline-scoped execution of outbound calls.

use crate::domain::gateways::UpstreamError;
use std::future::Future;
use std::time::Duration;

/// Runs `call` to completion or until `limit` elapses, whichever comes first.
///
/// On expiry the in-flight future is dropped, which cancels the underlying
/// request. The timer is owned by the returned future and released on every
/// exit path.
///
/// # Errors
///
/// Returns [`UpstreamError::Timeout`] on expiry, or the call's own error.
pub async fn within_deadline<T, F>(limit: Duration, call: F) -> Result<T, UpstreamError>
where
    F: Future<Output = Result<T, UpstreamError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_elapsed) => Err(UpstreamError::Timeout),
    }
}
