use serde::Serialize;

/// One line of the recent-activity feed.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ActivityResponse {
    /// Upload time as `HH:MM`.
    #[schema(example = "14:07")]
    pub time: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[schema(example = "Audio track \"voices.flac\" uploaded")]
    pub message: String,
}
