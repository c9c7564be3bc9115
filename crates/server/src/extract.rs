//! Request body extraction.
//!
//! Bodies arrive either as JSON or as `application/x-www-form-urlencoded`
//! form data; both decode into the same typed request. A request without a
//! `Content-Type` has its body ignored and decodes as if every field were
//! absent.

use crate::error::ApiError;
use crate::operation::Operation;
use axum::Json;
use axum::extract::{Form, FromRequest, Request};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::de::value::{Error as ValueError, MapDeserializer};

/// A request body tied to the operation that consumes it.
pub trait OperationRequest: DeserializeOwned + Send + 'static {
    const OPERATION: Operation;
}

/// Extractor for an [`OperationRequest`] sent as JSON or form data.
///
/// Undecodable bodies are rejected with [`ApiError::MalformedBody`] in the
/// operation's envelope.
#[derive(Debug)]
pub struct RequestBody<T>(pub T);

impl<S, T> FromRequest<S> for RequestBody<T>
where
    S: Send + Sync,
    T: OperationRequest,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let malformed = |detail: String| ApiError::MalformedBody {
            operation: T::OPERATION,
            detail,
        };

        if !req.headers().contains_key(CONTENT_TYPE) {
            let value = empty_body::<T>().map_err(|e| malformed(e.to_string()))?;
            Ok(Self(value))
        } else if is_form(req.headers()) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            Ok(Self(value))
        }
    }
}

/// Decode `T` from a body with no fields.
fn empty_body<T: DeserializeOwned>() -> Result<T, ValueError> {
    T::deserialize(MapDeserializer::new(std::iter::empty::<(&str, &str)>()))
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}
