//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections use the application error envelope.
///
/// Every decode failure becomes a 422 `VALIDATION_ERROR`: an empty or
/// malformed body, a missing JSON `Content-Type`, missing or wrong-typed
/// fields.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateVideo>) -> AppResult<Json<Video>> {
///     // input has every required field here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ValidatedJson(value))
    }
}
