use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A confirmed operator account.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    /// Equals the subject issued by the external auth provider.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub code: Option<String>,

    /// Either an absolute URL or a storage key; resolved at read time.
    pub avatar_url: Option<String>,

    /// Free-form; only `"admin"` carries special meaning.
    pub role: String,
    pub department: Option<String>,

    pub email: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub bio: Option<String>,

    #[sea_orm(has_many)]
    pub blueprints: HasMany<super::blueprint::Entity>,

    #[sea_orm(has_many)]
    pub audit_logs: HasMany<super::audit_log::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
