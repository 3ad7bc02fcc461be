use serde_json::json;

use crate::common::{TestApp, routes};

mod stats {
    use super::*;

    #[tokio::test]
    async fn counts_reflect_live_table_contents() {
        let app = TestApp::spawn().await;
        let (a, _) = app.seed_profile("OP-0300", "operator").await;
        app.seed_profile("OP-0301", "operator").await;

        app.seed_file(
            Some((a, "profile")),
            "one.flac",
            "uploads/s1.flac",
            Some("audio/flac"),
        )
        .await;
        app.seed_file(
            Some((a, "profile")),
            "two.mp3",
            "uploads/s2.mp3",
            Some("audio/mpeg"),
        )
        .await;
        app.seed_file(
            Some((a, "profile")),
            "three.pdf",
            "uploads/s3.pdf",
            Some("application/pdf"),
        )
        .await;

        let res = app.get_without_token(routes::STATS).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["fileCount"], 3);
        assert_eq!(res.body["trackCount"], 2);
        assert_eq!(res.body["userCount"], 2);
        assert_eq!(res.body["systemStatus"], "ACTIVE");
    }

    #[tokio::test]
    async fn counts_are_not_cached() {
        let app = TestApp::spawn().await;
        let (id, token) = app.seed_profile("OP-0302", "operator").await;
        let file_id = app
            .seed_file(Some((id, "profile")), "x.txt", "uploads/sx.txt", None)
            .await;

        let before = app.get_without_token(routes::STATS).await;
        assert_eq!(before.body["fileCount"], 1);

        app.delete_with_token(&format!("/files/{file_id}"), &token)
            .await;

        let after = app.get_without_token(routes::STATS).await;
        assert_eq!(after.body["fileCount"], 0);
    }
}

mod activities {
    use super::*;

    #[tokio::test]
    async fn feed_holds_the_five_newest_uploads() {
        let app = TestApp::spawn().await;
        let (id, _) = app.seed_profile("OP-0310", "operator").await;

        for i in 0..6 {
            app.seed_file(
                Some((id, "profile")),
                &format!("file-{i}.txt"),
                &format!("uploads/act-{i}.txt"),
                None,
            )
            .await;
        }

        let res = app.get_without_token(routes::ACTIVITIES).await;

        assert_eq!(res.status, 200, "{}", res.text);
        let feed = res.body.as_array().unwrap();
        assert_eq!(feed.len(), 5);
        // Newest first; the oldest upload fell off the feed.
        assert_eq!(feed[0]["message"], "File \"file-5.txt\" uploaded");
        assert!(
            feed.iter()
                .all(|entry| entry["message"] != "File \"file-0.txt\" uploaded")
        );
    }

    #[tokio::test]
    async fn audio_uploads_are_rendered_as_tracks() {
        let app = TestApp::spawn().await;
        let (id, _) = app.seed_profile("OP-0311", "operator").await;

        app.seed_file(
            Some((id, "profile")),
            "voices.flac",
            "uploads/act-a.flac",
            Some("audio/flac"),
        )
        .await;
        app.seed_file(
            Some((id, "profile")),
            "notes.txt",
            "uploads/act-b.txt",
            Some("text/plain"),
        )
        .await;

        let res = app.get_without_token(routes::ACTIVITIES).await;

        let feed = res.body.as_array().unwrap();
        assert_eq!(feed[0]["message"], "File \"notes.txt\" uploaded");
        assert_eq!(feed[1]["message"], "Audio track \"voices.flac\" uploaded");
        for entry in feed {
            assert_eq!(entry["type"], "upload");
        }
    }

    #[tokio::test]
    async fn feed_times_are_hh_mm() {
        let app = TestApp::spawn().await;
        let (id, _) = app.seed_profile("OP-0312", "operator").await;
        app.seed_file(Some((id, "profile")), "t.txt", "uploads/act-t.txt", None)
            .await;

        let res = app.get_without_token(routes::ACTIVITIES).await;

        let time = res.body[0]["time"].as_str().unwrap();
        let (hh, mm) = time.split_once(':').expect("HH:MM");
        assert_eq!(hh.len(), 2);
        assert_eq!(mm.len(), 2);
        assert!(hh.parse::<u8>().unwrap() < 24);
        assert!(mm.parse::<u8>().unwrap() < 60);
    }

    #[tokio::test]
    async fn empty_portal_has_an_empty_feed() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::ACTIVITIES).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }
}
