use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn asset_can_be_created_without_authentication() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(
            routes::ASSETS,
            &json!({
                "name": "Reclamation Rig",
                "code": "RIG-001",
                "type": "excavator",
                "location": "Sector 7",
            }),
        )
        .await;

    assert_eq!(res.status, 201, "{}", res.text);
    assert!(res.body["id"].is_number());
    assert_eq!(res.body["status"], "active");
    assert_eq!(res.body["type"], "excavator");
}

#[tokio::test]
async fn duplicate_asset_code_conflicts() {
    let app = TestApp::spawn().await;
    let body = json!({"name": "Rig", "code": "RIG-002", "type": "excavator"});

    let first = app.post_without_token(routes::ASSETS, &body).await;
    assert_eq!(first.status, 201, "{}", first.text);

    let res = app.post_without_token(routes::ASSETS, &body).await;

    assert_eq!(res.status, 409);
    assert_eq!(res.body["code"], "CONFLICT");
}

#[tokio::test]
async fn listing_returns_every_asset() {
    let app = TestApp::spawn().await;

    for i in 0..3 {
        let res = app
            .post_without_token(
                routes::ASSETS,
                &json!({"name": format!("Asset {i}"), "code": format!("AS-{i}"), "type": "generic"}),
            )
            .await;
        assert_eq!(res.status, 201);
    }

    let res = app.get_without_token(routes::ASSETS).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn blank_name_or_code_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post_without_token(
            routes::ASSETS,
            &json!({"name": "  ", "code": "AS-9", "type": "generic"}),
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}
