use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Null when the action was performed by a pending applicant.
    pub operator_id: Option<Uuid>,

    #[sea_orm(belongs_to, from = "operator_id", to = "id")]
    pub operator: Option<super::profile::Entity>,

    pub action: String,
    pub target: Option<String>,
    pub ip_address: Option<String>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
