use serde::{Deserialize, Serialize};

/// Partial update of the caller's own record: only fields present in the
/// body are applied.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateMeRequest {
    pub code: Option<String>,
    /// Applied only when the caller is a confirmed operator.
    pub department: Option<String>,
    pub avatar_url: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub bio: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    pub id: String,
    /// `"profile"` for operators, `"tempop"` for applicants.
    #[serde(rename = "type")]
    pub identity: &'static str,
    pub code: Option<String>,
    pub email: Option<String>,
    /// Absolute URL, or a presigned URL resolved from a stored key.
    pub avatar_url: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub bio: Option<String>,
    /// `"guest"` for applicants.
    pub role: String,
    pub department: Option<String>,
    pub status: String,
}
