use serde::{Deserialize, Serialize};

use crate::entity::asset;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateAssetRequest {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Defaults to `"active"`.
    pub status: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct AssetResponse {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub status: String,
    pub location: Option<String>,
}

impl From<asset::Model> for AssetResponse {
    fn from(model: asset::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            asset_type: model.asset_type,
            status: model.status,
            location: model.location,
        }
    }
}
