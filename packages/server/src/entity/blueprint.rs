use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named, versioned JSON document owned by a profile.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blueprint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub created_by: Option<Uuid>,

    #[sea_orm(belongs_to, from = "created_by", to = "id")]
    pub creator: Option<super::profile::Entity>,

    pub name: String,
    pub version: String,

    #[sea_orm(default_value = false)]
    pub is_public: bool,

    /// Free-form blueprint payload.
    #[sea_orm(column_type = "JsonBinary")]
    pub data: serde_json::Value,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
