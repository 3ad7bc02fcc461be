use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entity::{profile, tempop};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::Caller;
use crate::models::admin::{
    ApplicationListResponse, ApplicationResponse, ApproveResponse, ListApplicationsParams,
};
use crate::state::AppState;
use crate::utils::{audit, net::client_ip};

/// Approved applicants start as ordinary operators in the intake
/// department.
const APPROVED_ROLE: &str = "operator";
const APPROVED_DEPARTMENT: &str = "新进人员";

#[utoipa::path(
    get,
    path = "/admin/applications",
    tag = "Admin",
    operation_id = "listApplications",
    summary = "List pending applications",
    description = "Returns a page of applications with `status == \"pending\"`, oldest \
        first. Requires an admin operator.",
    params(ListApplicationsParams),
    responses(
        (status = 200, description = "Pending applications", body = ApplicationListResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(caller, state))]
pub async fn list_applications(
    caller: Caller,
    State(state): State<AppState>,
    Query(params): Query<ListApplicationsParams>,
) -> Result<Json<ApplicationListResponse>, AppError> {
    caller.require_admin()?;

    let page = params.page.unwrap_or(1).max(1);
    let size = params.size.unwrap_or(10).clamp(1, 50);

    let paginator = tempop::Entity::find()
        .filter(tempop::Column::Status.eq("pending"))
        .order_by_asc(tempop::Column::AppliedAt)
        .paginate(&state.db, size);

    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page - 1).await?;

    Ok(Json(ApplicationListResponse {
        items: items.into_iter().map(ApplicationResponse::from).collect(),
        total,
        page,
        pages: total.div_ceil(size),
    }))
}

#[utoipa::path(
    post,
    path = "/admin/approve/{user_id}",
    tag = "Admin",
    operation_id = "approveApplication",
    summary = "Promote an applicant to operator",
    description = "Copies the application into a new profile (remapping the `APP` code \
        prefix to `OP`), deletes the application, and commits both as one \
        unit. Requires an admin operator.",
    params(("user_id" = String, Path, description = "Applicant identity UUID")),
    responses(
        (status = 200, description = "Applicant promoted", body = ApproveResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Application not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(caller, state, headers), fields(user_id = %user_id))]
pub async fn approve_application(
    caller: Caller,
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<Json<ApproveResponse>, AppError> {
    caller.require_admin()?;

    let user_id =
        Uuid::parse_str(&user_id).map_err(|_| AppError::Validation("Invalid user ID".into()))?;

    let applicant = tempop::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".into()))?;

    // APP-0007 becomes OP-0007.
    let official_code = applicant.code.replacen("APP", "OP", 1);

    let new_profile = profile::ActiveModel {
        id: Set(applicant.id),
        code: Set(Some(official_code.clone())),
        avatar_url: Set(applicant.avatar_url),
        role: Set(APPROVED_ROLE.to_string()),
        department: Set(Some(APPROVED_DEPARTMENT.to_string())),
        email: Set(applicant.email),
        gender: Set(applicant.gender),
        age: Set(applicant.age),
        address: Set(applicant.address),
        bio: Set(applicant.bio),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let txn = state.db.begin().await?;
    new_profile.insert(&txn).await?;
    tempop::Entity::delete_by_id(user_id).exec(&txn).await?;
    audit::record(
        &txn,
        Some(caller.id()),
        "admin:approve",
        Some(official_code.clone()),
        client_ip(&headers),
    )
    .await?;
    txn.commit().await?;

    info!("Approved applicant {} as {}", user_id, official_code);

    Ok(Json(ApproveResponse {
        message: format!("Operator {official_code} approved successfully"),
    }))
}
