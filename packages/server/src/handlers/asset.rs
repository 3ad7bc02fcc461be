use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, SqlErr};
use tracing::instrument;

use crate::entity::asset;
use crate::error::AppError;
use crate::extractors::json::AppJson;
use crate::models::asset::{AssetResponse, CreateAssetRequest};
use crate::state::AppState;

/// Register a new industrial asset. No operator session required; assets
/// are inventoried from shop-floor terminals.
#[instrument(skip(state, payload), fields(code = %payload.code))]
pub async fn create_asset(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAssetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.name.trim().to_string();
    let code = payload.code.trim().to_string();
    if name.is_empty() || code.is_empty() {
        return Err(AppError::Validation(
            "Asset name and code must not be empty".into(),
        ));
    }

    let new_asset = asset::ActiveModel {
        name: Set(name),
        code: Set(code.clone()),
        asset_type: Set(payload.asset_type),
        status: Set(payload.status.unwrap_or_else(|| "active".to_string())),
        location: Set(payload.location),
        ..Default::default()
    };

    let model = new_asset
        .insert(&state.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::Conflict(format!("Asset code '{code}' already exists"))
            }
            _ => AppError::from(e),
        })?;

    Ok((StatusCode::CREATED, Json(AssetResponse::from(model))))
}

/// List every asset, unfiltered.
#[instrument(skip(state))]
pub async fn list_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetResponse>>, AppError> {
    let assets = asset::Entity::find().all(&state.db).await?;
    Ok(Json(assets.into_iter().map(AssetResponse::from).collect()))
}
