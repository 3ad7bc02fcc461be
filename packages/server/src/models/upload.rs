use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PresignUploadRequest {
    #[schema(example = "design.png")]
    pub filename: String,
    #[schema(example = "image/png")]
    pub content_type: String,
}
