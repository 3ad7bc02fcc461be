use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set};
use uuid::Uuid;

use crate::entity::audit_log;

/// Append an audit entry. Runs on the caller's connection so it joins the
/// surrounding transaction.
pub async fn record<C: ConnectionTrait>(
    db: &C,
    operator_id: Option<Uuid>,
    action: &str,
    target: Option<String>,
    ip_address: Option<String>,
) -> Result<(), DbErr> {
    audit_log::ActiveModel {
        operator_id: Set(operator_id),
        action: Set(action.to_owned()),
        target: Set(target),
        ip_address: Set(ip_address),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(())
}
