use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A JSON response body, optionally indented.
///
/// Same contract as [`axum::Json`]: `Content-Type: application/json`, and a
/// 500 if the value fails to serialize.
#[derive(Debug, Clone)]
pub struct JsonBody<T> {
    value: T,
    pretty: bool,
}

impl<T> JsonBody<T> {
    pub fn new(value: T, pretty: bool) -> Self {
        Self { value, pretty }
    }
}

impl<T> IntoResponse for JsonBody<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(&self.value)
        } else {
            serde_json::to_vec(&self.value)
        };

        match bytes {
            Ok(mut bytes) => {
                if self.pretty {
                    bytes.push(b'\n');
                }
                (
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/json"),
                    )],
                    bytes,
                )
                    .into_response()
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )],
                    err.to_string(),
                )
                    .into_response()
            }
        }
    }
}
