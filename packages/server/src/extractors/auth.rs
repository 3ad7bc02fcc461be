use axum::{extract::FromRequestParts, http::request::Parts};
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::entity::{profile, tempop};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// The resolved caller identity, extracted from the
/// `Authorization: Bearer <token>` header.
///
/// A subject is either a confirmed operator or a pending applicant, never
/// both. Only `Operator` carries a role and a department; consumers must
/// branch on the variant instead of assuming operator capabilities.
pub enum Caller {
    Operator(profile::Model),
    Applicant(tempop::Model),
}

impl Caller {
    pub fn id(&self) -> Uuid {
        match self {
            Caller::Operator(profile) => profile.id,
            Caller::Applicant(applicant) => applicant.id,
        }
    }

    /// Tag stored alongside soft identity references such as
    /// `file.uploader_type`.
    pub fn kind(&self) -> &'static str {
        match self {
            Caller::Operator(_) => "profile",
            Caller::Applicant(_) => "tempop",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Caller::Operator(profile) if profile.role == "admin")
    }

    /// Returns `Ok(())` for an admin operator, `Err(PermissionDenied)`
    /// otherwise.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::TokenMissing)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::TokenInvalid)?;

        let claims = jwt::verify(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        let subject = claims
            .sub
            .as_deref()
            .and_then(|sub| Uuid::parse_str(sub).ok())
            .ok_or(AppError::InvalidCredentials)?;

        // Confirmed operators first; applicants live in the smaller table.
        if let Some(profile) = profile::Entity::find_by_id(subject).one(&state.db).await? {
            return Ok(Caller::Operator(profile));
        }

        if let Some(applicant) = tempop::Entity::find_by_id(subject).one(&state.db).await? {
            return Ok(Caller::Applicant(applicant));
        }

        Err(AppError::AccessDenied)
    }
}
