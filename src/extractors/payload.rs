//! Extract and validate a plant JSON body.

use crate::error::AppError;
use crate::model::NewPlant;
use crate::validation::PlantValidator;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};

/// A trimmed, validated [`NewPlant`]. Body rejections surface as [`AppError`] so every
/// client error carries the same JSON shape.
#[derive(Clone, Debug)]
pub struct PlantPayload(pub NewPlant);

#[async_trait]
impl<S> FromRequest<S> for PlantPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<NewPlant>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        Ok(PlantPayload(PlantValidator::validate(body)?))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    match rejection {
        // Well-formed JSON that does not fit the shape, e.g. a missing field.
        JsonRejection::JsonDataError(e) => AppError::Validation(e.body_text()),
        // A streamed body that ran past the request body limit while buffering.
        other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge(other.body_text())
        }
        other => AppError::BadRequest(other.body_text()),
    }
}
