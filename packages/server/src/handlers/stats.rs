use axum::{Json, extract::State};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::instrument;

use crate::entity::{file, profile};
use crate::error::AppError;
use crate::models::stats::StatsResponse;
use crate::state::AppState;

/// Aggregate counts for the portal dashboard.
#[instrument(skip(state))]
pub async fn system_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let file_count = file::Entity::find().count(&state.db).await?;

    let track_count = file::Entity::find()
        .filter(file::Column::MimeType.like("audio/%"))
        .count(&state.db)
        .await?;

    let user_count = profile::Entity::find().count(&state.db).await?;

    Ok(Json(StatsResponse {
        file_count,
        track_count,
        user_count,
        system_status: "ACTIVE",
    }))
}
