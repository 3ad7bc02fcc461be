use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::tempop;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListApplicationsParams {
    /// Page number (1-indexed).
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Items per page (1-50, default 10).
    #[param(example = 10)]
    pub size: Option<u64>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ApplicationResponse {
    pub id: String,
    pub email: Option<String>,
    #[schema(example = "APP-0007")]
    pub code: String,
    pub avatar_url: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

impl From<tempop::Model> for ApplicationResponse {
    fn from(model: tempop::Model) -> Self {
        Self {
            id: model.id.to_string(),
            email: model.email,
            code: model.code,
            avatar_url: model.avatar_url,
            gender: model.gender,
            age: model.age,
            address: model.address,
            bio: model.bio,
            status: model.status,
            applied_at: model.applied_at,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ApplicationListResponse {
    pub items: Vec<ApplicationResponse>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ApproveResponse {
    #[schema(example = "Operator OP-0007 approved successfully")]
    pub message: String,
}
