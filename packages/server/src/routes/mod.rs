use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", asset_routes())
        .nest("/upload", upload_routes())
        .nest("/files", file_routes())
        .nest("/users", user_routes())
        .nest("/admin", admin_routes())
        .nest("/stats", stats_routes())
        .nest("/activities", activity_routes())
}

fn asset_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(handlers::asset::list_assets).post(handlers::asset::create_asset),
    )
}

fn upload_routes() -> Router<AppState> {
    Router::new().route("/presigned", post(handlers::upload::presign_upload))
}

fn file_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::file::list_files).post(handlers::file::create_file),
        )
        .route("/batch-delete", post(handlers::file::batch_delete_files))
        .route("/{id}", delete(handlers::file::delete_file))
}

fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/me",
        get(handlers::user::me).patch(handlers::user::update_me),
    )
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/applications", get(handlers::admin::list_applications))
        .route(
            "/approve/{user_id}",
            post(handlers::admin::approve_application),
        )
}

fn stats_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::stats::system_stats))
}

fn activity_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::activity::recent_activities))
}
