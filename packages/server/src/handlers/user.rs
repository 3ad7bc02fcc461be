use axum::{Json, extract::State};
use common::storage::{ObjectStore, PRESIGN_EXPIRY_SECS};
use sea_orm::{ActiveModelTrait, Set};
use tracing::instrument;

use crate::entity::{profile, tempop};
use crate::error::AppError;
use crate::extractors::auth::Caller;
use crate::extractors::json::AppJson;
use crate::models::user::{MeResponse, UpdateMeRequest};
use crate::state::AppState;

/// Return the caller's own record, shaped by identity variant.
#[instrument(skip(caller, state))]
pub async fn me(caller: Caller, State(state): State<AppState>) -> Json<MeResponse> {
    Json(shape_me(caller, &state.store).await)
}

/// Partially update the caller's own record.
#[instrument(skip(caller, state, payload))]
pub async fn update_me(
    caller: Caller,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateMeRequest>,
) -> Result<Json<MeResponse>, AppError> {
    let updated = match caller {
        Caller::Operator(model) => {
            let mut active: profile::ActiveModel = model.into();
            if let Some(code) = payload.code {
                active.code = Set(Some(code));
            }
            // Department changes are an operator capability.
            if let Some(department) = payload.department {
                active.department = Set(Some(department));
            }
            if let Some(avatar_url) = payload.avatar_url {
                active.avatar_url = Set(Some(avatar_url));
            }
            if let Some(gender) = payload.gender {
                active.gender = Set(Some(gender));
            }
            if let Some(age) = payload.age {
                active.age = Set(Some(age));
            }
            if let Some(address) = payload.address {
                active.address = Set(Some(address));
            }
            if let Some(bio) = payload.bio {
                active.bio = Set(Some(bio));
            }
            Caller::Operator(active.update(&state.db).await?)
        }
        Caller::Applicant(model) => {
            let mut active: tempop::ActiveModel = model.into();
            if let Some(code) = payload.code {
                active.code = Set(code);
            }
            if let Some(avatar_url) = payload.avatar_url {
                active.avatar_url = Set(Some(avatar_url));
            }
            if let Some(gender) = payload.gender {
                active.gender = Set(Some(gender));
            }
            if let Some(age) = payload.age {
                active.age = Set(Some(age));
            }
            if let Some(address) = payload.address {
                active.address = Set(Some(address));
            }
            if let Some(bio) = payload.bio {
                active.bio = Set(Some(bio));
            }
            Caller::Applicant(active.update(&state.db).await?)
        }
    };

    Ok(Json(shape_me(updated, &state.store).await))
}

async fn shape_me(caller: Caller, store: &ObjectStore) -> MeResponse {
    match caller {
        Caller::Operator(profile) => MeResponse {
            id: profile.id.to_string(),
            identity: "profile",
            code: profile.code,
            email: profile.email,
            avatar_url: resolve_avatar(profile.avatar_url, store).await,
            gender: profile.gender,
            age: profile.age,
            address: profile.address,
            bio: profile.bio,
            role: profile.role,
            department: profile.department,
            status: "active".to_string(),
        },
        Caller::Applicant(applicant) => MeResponse {
            id: applicant.id.to_string(),
            identity: "tempop",
            code: Some(applicant.code),
            email: applicant.email,
            avatar_url: resolve_avatar(applicant.avatar_url, store).await,
            gender: applicant.gender,
            age: applicant.age,
            address: applicant.address,
            bio: applicant.bio,
            role: "guest".to_string(),
            department: None,
            status: applicant.status,
        },
    }
}

/// Legacy rows store either a full URL or a bare storage key. Absolute
/// URLs pass through; keys get a presigned URL, falling back to the raw
/// key if the gateway is unavailable.
async fn resolve_avatar(avatar: Option<String>, store: &ObjectStore) -> Option<String> {
    let avatar = avatar?;
    if avatar.starts_with("http://") || avatar.starts_with("https://") {
        return Some(avatar);
    }

    match store
        .presign_download(&avatar, None, PRESIGN_EXPIRY_SECS)
        .await
    {
        Some(url) => Some(url),
        None => Some(avatar),
    }
}
