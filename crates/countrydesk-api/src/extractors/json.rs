//! `JsonBody` extractor: a JSON body that degrades to `T::default()`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON request body where a missing, malformed, or mistyped payload is
/// read as `T::default()`.
///
/// Request DTOs keep every field optional, so a bad body surfaces as the
/// endpoint's own missing-fields error instead of a framework rejection.
/// Oversized bodies are still rejected.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::BytesRejection(e)) => Err(e.into_response()),
            Err(rejection) => {
                debug!(
                    reason = rejection_reason(&rejection),
                    "Unreadable JSON body treated as empty"
                );
                Ok(JsonBody(T::default()))
            }
        }
    }
}

/// Names the kind of rejection without echoing any of the payload.
///
/// Serde's messages quote the offending value, which may be a password.
fn rejection_reason(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonDataError(_) => "mistyped fields",
        JsonRejection::JsonSyntaxError(_) => "invalid JSON",
        JsonRejection::MissingJsonContentType(_) => "missing JSON content type",
        _ => "unreadable body",
    }
}
