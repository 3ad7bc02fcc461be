use serde::Serialize;

/// Live aggregate counts; nothing is cached.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StatsResponse {
    #[serde(rename = "fileCount")]
    pub file_count: u64,
    /// Files whose MIME type starts with `audio/`.
    #[serde(rename = "trackCount")]
    pub track_count: u64,
    #[serde(rename = "userCount")]
    pub user_count: u64,
    #[serde(rename = "systemStatus")]
    pub system_status: &'static str,
}
