use sea_orm::EntityTrait;
use serde_json::json;

use crate::common::{TestApp, routes};

mod read_me {
    use super::*;

    #[tokio::test]
    async fn operator_sees_profile_shape() {
        let app = TestApp::spawn().await;
        let (id, token) = app.seed_profile("OP-0010", "operator").await;

        let res = app.get_with_token(routes::USERS_ME, &token).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], id.to_string());
        assert_eq!(res.body["type"], "profile");
        assert_eq!(res.body["code"], "OP-0010");
        assert_eq!(res.body["role"], "operator");
        assert_eq!(res.body["department"], "基建工程部");
        assert_eq!(res.body["status"], "active");
    }

    #[tokio::test]
    async fn applicant_sees_tempop_shape_with_guest_role() {
        let app = TestApp::spawn().await;
        let (id, token) = app.seed_tempop("APP-0010").await;

        let res = app.get_with_token(routes::USERS_ME, &token).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], id.to_string());
        assert_eq!(res.body["type"], "tempop");
        assert_eq!(res.body["role"], "guest");
        assert_eq!(res.body["status"], "pending");
        assert!(res.body["department"].is_null());
    }

    #[tokio::test]
    async fn stored_avatar_key_is_resolved_to_a_presigned_url() {
        let app = TestApp::spawn().await;
        let (id, token) = app.seed_profile("OP-0011", "operator").await;

        let mut active: server::entity::profile::ActiveModel =
            server::entity::profile::Entity::find_by_id(id)
                .one(&app.db)
                .await
                .unwrap()
                .unwrap()
                .into();
        active.avatar_url = sea_orm::Set(Some("uploads/abc-avatar.png".to_string()));
        server::entity::profile::Entity::update(active)
            .exec(&app.db)
            .await
            .unwrap();

        let res = app.get_with_token(routes::USERS_ME, &token).await;

        let avatar = res.body["avatar_url"].as_str().expect("avatar decorated");
        assert!(avatar.contains("uploads/abc-avatar.png"));
        assert!(avatar.contains("X-Amz-Signature"));
    }

    #[tokio::test]
    async fn absolute_avatar_url_passes_through_unchanged() {
        let app = TestApp::spawn().await;
        let (id, token) = app.seed_profile("OP-0012", "operator").await;

        let mut active: server::entity::profile::ActiveModel =
            server::entity::profile::Entity::find_by_id(id)
                .one(&app.db)
                .await
                .unwrap()
                .unwrap()
                .into();
        active.avatar_url = sea_orm::Set(Some("https://cdn.example.com/op.png".to_string()));
        server::entity::profile::Entity::update(active)
            .exec(&app.db)
            .await
            .unwrap();

        let res = app.get_with_token(routes::USERS_ME, &token).await;

        assert_eq!(res.body["avatar_url"], "https://cdn.example.com/op.png");
    }
}

mod update_me {
    use super::*;

    #[tokio::test]
    async fn only_fields_present_in_the_body_are_applied() {
        let app = TestApp::spawn().await;
        let (_, token) = app.seed_profile("OP-0020", "operator").await;

        let res = app
            .patch_with_token(
                routes::USERS_ME,
                &json!({"bio": "Night shift.", "age": 28}),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["bio"], "Night shift.");
        assert_eq!(res.body["age"], 28);
        // Untouched fields survive.
        assert_eq!(res.body["code"], "OP-0020");
        assert_eq!(res.body["department"], "基建工程部");
    }

    #[tokio::test]
    async fn operator_can_change_department() {
        let app = TestApp::spawn().await;
        let (_, token) = app.seed_profile("OP-0021", "operator").await;

        let res = app
            .patch_with_token(routes::USERS_ME, &json!({"department": "勘探分队"}), &token)
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["department"], "勘探分队");
    }

    #[tokio::test]
    async fn applicant_department_update_is_ignored() {
        let app = TestApp::spawn().await;
        let (_, token) = app.seed_tempop("APP-0021").await;

        let res = app
            .patch_with_token(
                routes::USERS_ME,
                &json!({"department": "勘探分队", "code": "APP-0099"}),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert!(res.body["department"].is_null());
        // Other fields still apply.
        assert_eq!(res.body["code"], "APP-0099");
    }
}
