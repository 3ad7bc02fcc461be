use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;
use uuid::Uuid;

use server::entity::{audit_log, profile, tempop};

use crate::common::{TestApp, routes};

mod applications {
    use super::*;

    #[tokio::test]
    async fn lists_only_pending_applications_with_pagination() {
        let app = TestApp::spawn().await;
        let (_, admin_token) = app.seed_profile("OP-0001", "admin").await;

        app.seed_tempop("APP-0001").await;
        app.seed_tempop("APP-0002").await;
        let (rejected, _) = app.seed_tempop("APP-0003").await;

        // Flip one application out of the pending state.
        let mut active: tempop::ActiveModel = tempop::Entity::find_by_id(rejected)
            .one(&app.db)
            .await
            .unwrap()
            .unwrap()
            .into();
        active.status = sea_orm::Set("rejected".to_string());
        tempop::Entity::update(active).exec(&app.db).await.unwrap();

        let res = app
            .get_with_token(routes::ADMIN_APPLICATIONS, &admin_token)
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["total"], 2);
        assert_eq!(res.body["page"], 1);
        assert_eq!(res.body["pages"], 1);
        let items = res.body["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert_eq!(item["status"], "pending");
        }
    }

    #[tokio::test]
    async fn page_size_is_honored_and_pages_computed() {
        let app = TestApp::spawn().await;
        let (_, admin_token) = app.seed_profile("OP-0002", "admin").await;

        for i in 0..3 {
            app.seed_tempop(&format!("APP-010{i}")).await;
        }

        let res = app
            .get_with_token(
                &format!("{}?page=2&size=2", routes::ADMIN_APPLICATIONS),
                &admin_token,
            )
            .await;

        assert_eq!(res.body["total"], 3);
        assert_eq!(res.body["page"], 2);
        assert_eq!(res.body["pages"], 2);
        assert_eq!(res.body["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn non_admin_operator_is_forbidden() {
        let app = TestApp::spawn().await;
        let (_, token) = app.seed_profile("OP-0200", "operator").await;

        let res = app.get_with_token(routes::ADMIN_APPLICATIONS, &token).await;

        assert_eq!(res.status, 403);
        assert_eq!(res.body["code"], "PERMISSION_DENIED");
    }

    #[tokio::test]
    async fn applicant_is_forbidden() {
        let app = TestApp::spawn().await;
        let (_, token) = app.seed_tempop("APP-0200").await;

        let res = app.get_with_token(routes::ADMIN_APPLICATIONS, &token).await;

        assert_eq!(res.status, 403);
    }
}

mod approve {
    use super::*;

    #[tokio::test]
    async fn promotes_the_applicant_and_remaps_the_code_prefix() {
        let app = TestApp::spawn().await;
        let (_, admin_token) = app.seed_profile("OP-0003", "admin").await;
        let (applicant_id, _) = app.seed_tempop("APP-0007").await;

        let res = app
            .post_with_token(&routes::admin_approve(applicant_id), &json!({}), &admin_token)
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert!(
            res.body["message"]
                .as_str()
                .unwrap()
                .contains("OP-0007")
        );

        let promoted = profile::Entity::find_by_id(applicant_id)
            .one(&app.db)
            .await
            .unwrap()
            .expect("profile created with the same id");
        assert_eq!(promoted.code.as_deref(), Some("OP-0007"));
        assert_eq!(promoted.role, "operator");
        assert_eq!(promoted.department.as_deref(), Some("新进人员"));

        let leftover = tempop::Entity::find_by_id(applicant_id)
            .one(&app.db)
            .await
            .unwrap();
        assert!(leftover.is_none(), "application row must be gone");
    }

    #[tokio::test]
    async fn only_the_first_app_occurrence_is_remapped() {
        let app = TestApp::spawn().await;
        let (_, admin_token) = app.seed_profile("OP-0004", "admin").await;
        let (applicant_id, _) = app.seed_tempop("APP-APPLE").await;

        app.post_with_token(&routes::admin_approve(applicant_id), &json!({}), &admin_token)
            .await;

        let promoted = profile::Entity::find_by_id(applicant_id)
            .one(&app.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(promoted.code.as_deref(), Some("OP-APPLE"));
    }

    #[tokio::test]
    async fn approval_is_audited() {
        let app = TestApp::spawn().await;
        let (admin_id, admin_token) = app.seed_profile("OP-0005", "admin").await;
        let (applicant_id, _) = app.seed_tempop("APP-0042").await;

        app.post_with_token(&routes::admin_approve(applicant_id), &json!({}), &admin_token)
            .await;

        let entry = audit_log::Entity::find()
            .filter(audit_log::Column::Action.eq("admin:approve"))
            .one(&app.db)
            .await
            .unwrap()
            .expect("audit entry written");
        assert_eq!(entry.operator_id, Some(admin_id));
        assert_eq!(entry.target.as_deref(), Some("OP-0042"));
    }

    #[tokio::test]
    async fn approving_twice_returns_not_found_the_second_time() {
        let app = TestApp::spawn().await;
        let (_, admin_token) = app.seed_profile("OP-0006", "admin").await;
        let (applicant_id, _) = app.seed_tempop("APP-0050").await;

        let first = app
            .post_with_token(&routes::admin_approve(applicant_id), &json!({}), &admin_token)
            .await;
        assert_eq!(first.status, 200);

        let second = app
            .post_with_token(&routes::admin_approve(applicant_id), &json!({}), &admin_token)
            .await;
        assert_eq!(second.status, 404);
        assert_eq!(second.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn unknown_application_is_not_found() {
        let app = TestApp::spawn().await;
        let (_, admin_token) = app.seed_profile("OP-0007", "admin").await;

        let res = app
            .post_with_token(&routes::admin_approve(Uuid::new_v4()), &json!({}), &admin_token)
            .await;

        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn non_admin_cannot_approve() {
        let app = TestApp::spawn().await;
        let (_, token) = app.seed_profile("OP-0201", "operator").await;
        let (applicant_id, _) = app.seed_tempop("APP-0060").await;

        let res = app
            .post_with_token(&routes::admin_approve(applicant_id), &json!({}), &token)
            .await;

        assert_eq!(res.status, 403);
        let still_pending = tempop::Entity::find_by_id(applicant_id)
            .one(&app.db)
            .await
            .unwrap();
        assert!(still_pending.is_some());
    }
}
