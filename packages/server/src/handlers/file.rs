use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use common::storage::{ObjectStore, PRESIGN_EXPIRY_SECS};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::instrument;
use uuid::Uuid;

use crate::entity::file;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::Caller;
use crate::extractors::json::AppJson;
use crate::models::file::{
    BatchDeleteRequest, BatchDeleteResponse, CreateFileRequest, FileResponse, ListFilesParams,
};
use crate::models::shared::{escape_like, validate_bulk_ids};
use crate::state::AppState;
use crate::utils::{audit, net::client_ip};

#[utoipa::path(
    post,
    path = "/files",
    tag = "Files",
    operation_id = "createFile",
    summary = "Register an uploaded file",
    description = "Records the metadata of a file the client already PUT into the bucket. \
        The uploader is always the authenticated caller; a client cannot register \
        a file on someone else's behalf.",
    request_body = CreateFileRequest,
    responses(
        (status = 201, description = "File recorded", body = FileResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Unknown subject (ACCESS_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(caller, state, payload), fields(filename = %payload.filename))]
pub async fn create_file(
    caller: Caller,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateFileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.filename.trim().is_empty() || payload.storage_key.trim().is_empty() {
        return Err(AppError::Validation(
            "filename and storage_key must not be empty".into(),
        ));
    }

    let new_file = file::ActiveModel {
        asset_id: Set(payload.asset_id),
        uploader_id: Set(Some(caller.id())),
        uploader_type: Set(Some(caller.kind().to_string())),
        filename: Set(payload.filename),
        storage_key: Set(payload.storage_key),
        url: Set(payload.url),
        size: Set(payload.size),
        mime_type: Set(payload.mime_type),
        artist: Set(payload.artist),
        cover_key: Set(payload.cover_key),
        lyrics_key: Set(payload.lyrics_key),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let model = new_file.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(FileResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/files",
    tag = "Files",
    operation_id = "listFiles",
    summary = "List files visible to the caller",
    description = "Admins see every file, others only their own uploads, newest first. \
        `url`, `cover_key` and `lyrics_key` are replaced with fresh presigned \
        download URLs in the response.",
    params(ListFilesParams),
    responses(
        (status = 200, description = "File list", body = Vec<FileResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Unknown subject (ACCESS_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(caller, state))]
pub async fn list_files(
    caller: Caller,
    State(state): State<AppState>,
    Query(params): Query<ListFilesParams>,
) -> Result<Json<Vec<FileResponse>>, AppError> {
    let mut select = file::Entity::find();

    if !caller.is_admin() {
        select = select.filter(file::Column::UploaderId.eq(caller.id()));
    }

    if let Some(prefix) = params.mime_type_prefix.as_deref() {
        let prefix = prefix.trim();
        if !prefix.is_empty() {
            select = select.filter(
                file::Column::MimeType
                    .like(LikeExpr::new(format!("{}%", escape_like(prefix))).escape('\\')),
            );
        }
    }

    let rows = select
        .order_by_desc(file::Column::CreatedAt)
        .all(&state.db)
        .await?;

    let mut files = Vec::with_capacity(rows.len());
    for row in rows {
        files.push(decorate(row, &state.store).await);
    }

    Ok(Json(files))
}

#[utoipa::path(
    delete,
    path = "/files/{id}",
    tag = "Files",
    operation_id = "deleteFile",
    summary = "Delete a file",
    description = "Removes the backing objects from the bucket (best effort) and the \
        database row. Permitted for the recorded uploader and for admins.",
    params(("id" = i32, Path, description = "File ID")),
    responses(
        (status = 204, description = "File deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "File not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(caller, state, headers), fields(id))]
pub async fn delete_file(
    caller: Caller,
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let record = file::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".into()))?;

    if !can_delete(&caller, &record) {
        return Err(AppError::PermissionDenied);
    }

    remove_objects(&state.store, &record).await;

    let txn = state.db.begin().await?;
    file::Entity::delete_by_id(id).exec(&txn).await?;
    audit::record(
        &txn,
        audit_operator(&caller),
        "file:delete",
        Some(record.storage_key.clone()),
        client_ip(&headers),
    )
    .await?;
    txn.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/files/batch-delete",
    tag = "Files",
    operation_id = "batchDeleteFiles",
    summary = "Delete several files at once",
    description = "Deletes every requested file the caller is allowed to delete and \
        silently skips the rest. Returns the number of rows actually removed.",
    request_body = BatchDeleteRequest,
    responses(
        (status = 200, description = "Deletion summary", body = BatchDeleteResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Unknown subject (ACCESS_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(caller, state, headers, payload), fields(count = payload.ids.len()))]
pub async fn batch_delete_files(
    caller: Caller,
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<BatchDeleteRequest>,
) -> Result<Json<BatchDeleteResponse>, AppError> {
    validate_bulk_ids(&payload.ids, "file", 100)?;

    let records = file::Entity::find()
        .filter(file::Column::Id.is_in(payload.ids))
        .all(&state.db)
        .await?;

    let permitted: Vec<file::Model> = records
        .into_iter()
        .filter(|record| can_delete(&caller, record))
        .collect();

    if permitted.is_empty() {
        return Ok(Json(BatchDeleteResponse { deleted: 0 }));
    }

    for record in &permitted {
        remove_objects(&state.store, record).await;
    }

    let ids: Vec<i32> = permitted.iter().map(|record| record.id).collect();

    let txn = state.db.begin().await?;
    let result = file::Entity::delete_many()
        .filter(file::Column::Id.is_in(ids))
        .exec(&txn)
        .await?;
    audit::record(
        &txn,
        audit_operator(&caller),
        "file:batch_delete",
        Some(format!("{} files", result.rows_affected)),
        client_ip(&headers),
    )
    .await?;
    txn.commit().await?;

    Ok(Json(BatchDeleteResponse {
        deleted: result.rows_affected,
    }))
}

/// Admins may delete anything; everyone else only their own uploads.
fn can_delete(caller: &Caller, record: &file::Model) -> bool {
    caller.is_admin() || record.uploader_id == Some(caller.id())
}

fn audit_operator(caller: &Caller) -> Option<Uuid> {
    match caller {
        Caller::Operator(profile) => Some(profile.id),
        Caller::Applicant(_) => None,
    }
}

/// Best-effort removal of every object backing a file record. Failures are
/// logged by the gateway; the database row is removed regardless.
async fn remove_objects(store: &ObjectStore, record: &file::Model) {
    store.delete_object(&record.storage_key).await;
    if let Some(key) = record.cover_key.as_deref() {
        store.delete_object(key).await;
    }
    if let Some(key) = record.lyrics_key.as_deref() {
        store.delete_object(key).await;
    }
}

/// Swap the stored key fields for fresh presigned download URLs. On gateway
/// failure the stored value stays.
async fn decorate(model: file::Model, store: &ObjectStore) -> FileResponse {
    let mut response = FileResponse::from(model);

    if let Some(url) = store
        .presign_download(
            &response.storage_key,
            Some(&response.filename),
            PRESIGN_EXPIRY_SECS,
        )
        .await
    {
        response.url = Some(url);
    }

    if let Some(key) = response.cover_key.clone()
        && let Some(url) = store.presign_download(&key, None, PRESIGN_EXPIRY_SECS).await
    {
        response.cover_key = Some(url);
    }

    if let Some(key) = response.lyrics_key.clone()
        && let Some(url) = store.presign_download(&key, None, PRESIGN_EXPIRY_SECS).await
    {
        response.lyrics_key = Some(url);
    }

    response
}
