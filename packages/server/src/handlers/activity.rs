use axum::{Json, extract::State};
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};
use tracing::instrument;

use crate::entity::file;
use crate::error::AppError;
use crate::models::activity::ActivityResponse;
use crate::state::AppState;

/// The five most recent uploads, rendered as human-readable feed lines.
#[instrument(skip(state))]
pub async fn recent_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, AppError> {
    let recent = file::Entity::find()
        .order_by_desc(file::Column::CreatedAt)
        .limit(5)
        .all(&state.db)
        .await?;

    let activities = recent
        .into_iter()
        .map(|file| {
            let message = match file.mime_type.as_deref() {
                Some(mime) if mime.starts_with("audio/") => {
                    format!("Audio track \"{}\" uploaded", file.filename)
                }
                _ => format!("File \"{}\" uploaded", file.filename),
            };

            ActivityResponse {
                time: file.created_at.format("%H:%M").to_string(),
                kind: "upload",
                message,
            }
        })
        .collect();

    Ok(Json(activities))
}
