use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "file")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub asset_id: Option<i32>,

    #[sea_orm(belongs_to, from = "asset_id", to = "id")]
    pub asset: Option<super::asset::Entity>,

    /// References a profile or a tempop depending on `uploader_type`.
    /// Deliberately not a foreign key: an applicant may upload before
    /// promotion, and promotion keeps the same UUID.
    pub uploader_id: Option<Uuid>,

    /// `"profile"` | `"tempop"`
    pub uploader_type: Option<String>,

    pub filename: String,

    /// Object key in the storage bucket.
    pub storage_key: String,

    /// Cached direct URL, replaced by a presigned URL at read time.
    pub url: Option<String>,

    pub size: Option<i64>,
    pub mime_type: Option<String>,

    // Music-specific metadata; absent for ordinary files.
    pub artist: Option<String>,
    pub cover_key: Option<String>,
    pub lyrics_key: Option<String>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
