use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor that converts body rejections into the service error
/// envelope
///
/// A missing or malformed JSON body becomes a 400 with the same shape as
/// validation failures instead of axum's plain-text rejection.
pub struct RawJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for RawJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(RawJson(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Request body was not valid JSON");
                Err(AppError::InvalidInput(
                    "Missing JSON in request body".to_string(),
                ))
            }
        }
    }
}
