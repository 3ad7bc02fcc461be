use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::file;

/// Metadata registered after the client finished its direct-to-bucket
/// upload. The uploader is always the authenticated caller; there is no
/// field for it.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateFileRequest {
    pub asset_id: Option<i32>,
    #[schema(example = "reactor_blueprint.glb")]
    pub filename: String,
    #[schema(example = "uploads/0e4f...-reactor_blueprint.glb")]
    pub storage_key: String,
    pub url: Option<String>,
    pub size: Option<i64>,
    #[schema(example = "model/gltf-binary")]
    pub mime_type: Option<String>,
    pub artist: Option<String>,
    pub cover_key: Option<String>,
    pub lyrics_key: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListFilesParams {
    /// Keep only files whose MIME type starts with this prefix
    /// (e.g. `audio/`).
    #[param(example = "audio/")]
    pub mime_type_prefix: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct BatchDeleteRequest {
    pub ids: Vec<i32>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct BatchDeleteResponse {
    /// Rows actually deleted; ids the caller may not delete are skipped.
    pub deleted: u64,
}

/// File row as returned to clients. `url`, `cover_key` and `lyrics_key`
/// are replaced by freshly presigned download URLs at read time; the
/// stored values are never mutated.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FileResponse {
    pub id: i32,
    pub asset_id: Option<i32>,
    pub uploader_id: Option<String>,
    pub uploader_type: Option<String>,
    pub filename: String,
    pub storage_key: String,
    pub url: Option<String>,
    pub size: Option<i64>,
    pub mime_type: Option<String>,
    pub artist: Option<String>,
    pub cover_key: Option<String>,
    pub lyrics_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<file::Model> for FileResponse {
    fn from(model: file::Model) -> Self {
        Self {
            id: model.id,
            asset_id: model.asset_id,
            uploader_id: model.uploader_id.map(|id| id.to_string()),
            uploader_type: model.uploader_type,
            filename: model.filename,
            storage_key: model.storage_key,
            url: model.url,
            size: model.size,
            mime_type: model.mime_type,
            artist: model.artist,
            cover_key: model.cover_key,
            lyrics_key: model.lyrics_key,
            created_at: model.created_at,
        }
    }
}
