use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A pending applicant, awaiting admin approval. Carries no role; always
/// treated as the lowest privilege.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tempop")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub email: Option<String>,
    pub code: String,
    pub avatar_url: Option<String>,

    pub gender: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub bio: Option<String>,

    /// `"pending"` until approved; the row is deleted on approval.
    pub status: String,

    pub applied_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
