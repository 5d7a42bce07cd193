use axum::{
    Json,
    extract::{Multipart, multipart::MultipartRejection},
};

use roster_people::ImageSummary;

use crate::app::errors::ApiError;
use crate::app::extract::multipart_error;

/// Multipart part holding the uploaded file.
pub const IMAGE_FIELD: &str = "image";

pub async fn post_image(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ImageSummary>, ApiError> {
    let mut multipart =
        multipart.map_err(|e| ApiError::rejected("form", e.status(), e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let format = field.content_type().map(str::to_string);
        let content = field
            .bytes()
            .await
            .map_err(multipart_error)?;

        let summary = ImageSummary::measure(filename, format, &content);
        tracing::debug!(bytes = content.len(), "image measured");
        return Ok(Json(summary));
    }

    Err(ApiError::invalid(&["form", IMAGE_FIELD], "field required"))
}
