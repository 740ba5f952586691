//! JSON response body with an explicit UTF-8 charset.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type used for every JSON body the service emits.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Serializes `T` as the response body with `content-type: application/json;charset=UTF-8`.
///
/// Unlike [`axum::Json`], which emits a bare `application/json`, clients of this
/// service expect the charset parameter to be present.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                )],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize response body: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
