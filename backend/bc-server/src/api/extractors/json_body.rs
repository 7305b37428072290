//! JSON request bodies that reject with the API error envelope

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use error_location::ErrorLocation;

/// Drop-in for [`Json`] as an extractor. A body that is not JSON, or does
/// not match `T`, becomes a 400 `{"error": {...}}` instead of axum's plain
/// text rejection.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(ApiError::from(rejection)),
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = rejection.body_text();

        match rejection {
            // Well-formed JSON of the wrong shape, e.g. a missing field
            JsonRejection::JsonDataError(_) => ApiError::Validation {
                message,
                field: None,
                location,
            },
            _ => ApiError::BadRequest { message, location },
        }
    }
}
