use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde_json::json;

use server::entity::blueprint;

use crate::common::TestApp;

#[tokio::test]
async fn blueprint_json_payload_roundtrips() {
    let app = TestApp::spawn().await;
    let (creator, _) = app.seed_profile("OP-0400", "operator").await;

    let data = json!({"modules": [{"kind": "reactor", "count": 2}], "rev": 4});
    blueprint::ActiveModel {
        created_by: Set(Some(creator)),
        name: Set("Outpost Mk II".to_string()),
        version: Set("v1.0".to_string()),
        is_public: Set(false),
        data: Set(data.clone()),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&app.db)
    .await
    .unwrap();

    let stored = blueprint::Entity::find()
        .filter(blueprint::Column::CreatedBy.eq(creator))
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.name, "Outpost Mk II");
    assert_eq!(stored.version, "v1.0");
    assert_eq!(stored.data, data);
    assert!(!stored.is_public);
}

#[tokio::test]
async fn blueprint_creator_reference_is_optional() {
    let app = TestApp::spawn().await;

    let model = blueprint::ActiveModel {
        created_by: Set(None),
        name: Set("Orphaned draft".to_string()),
        version: Set("v1.0".to_string()),
        is_public: Set(true),
        data: Set(json!({})),
        created_at: Set(Utc::now()),
        updated_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&app.db)
    .await
    .unwrap();

    assert!(model.created_by.is_none());
    assert!(model.is_public);
}
