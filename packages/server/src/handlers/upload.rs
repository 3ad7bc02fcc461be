use axum::{Json, extract::State};
use common::storage::UploadCredentials;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::upload::PresignUploadRequest;
use crate::state::AppState;
use crate::utils::filename::validate_upload_filename;

#[utoipa::path(
    post,
    path = "/upload/presigned",
    tag = "Upload",
    operation_id = "presignUpload",
    summary = "Issue direct-to-bucket upload credentials",
    description = "Returns a presigned PUT URL scoped to a fresh `uploads/<uuid>-<filename>` \
        key and the given content type, valid for one hour. The file body never \
        transits this service; clients PUT it straight to the bucket and then \
        register the metadata via `POST /files`.",
    request_body = PresignUploadRequest,
    responses(
        (status = 200, description = "Upload credentials", body = UploadCredentials),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Object store unavailable (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(filename = %payload.filename))]
pub async fn presign_upload(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PresignUploadRequest>,
) -> Result<Json<UploadCredentials>, AppError> {
    let filename = validate_upload_filename(&payload.filename)
        .map_err(|e| AppError::Validation(e.message().into()))?;

    let credentials = state
        .store
        .presign_upload(filename, &payload.content_type)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to generate upload URL: {e}")))?;

    Ok(Json(credentials))
}
