//! Integration tests per app e recensioni
//!
//! Test per:
//! - POST /apps, GET /apps, GET /apps/download/{app_id}, DELETE /apps/{app_id}
//! - GET /reviews/{app_id}, POST /reviews

mod common;

#[cfg(test)]
mod app_tests {
    use super::common::*;
    use axum_test::http::StatusCode;
    use axum_test::http::header::AUTHORIZATION;
    use betalink_server::dtos::{AppDTO, DownloadDTO, ReviewDTO};
    use serde_json::json;
    use sqlx::SqlitePool;

    // ============================================================
    // Test per /apps
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "apps")))]
    async fn test_create_app(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        let response = server
            .post("/apps")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .json(&json!({
                "title": "  Photo Vault ",
                "description": "Encrypted photo storage.",
                "apk_path": "uploads/photo-vault.apk"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let app: AppDTO = response.json();
        assert_eq!(app.title, "Photo Vault");
        assert_eq!(app.developer_id, DEVELOPER);
        assert_eq!(app.downloads, 0);
        assert_eq!(app.logo_path, "");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_create_app_requires_apk(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        let response = server
            .post("/apps")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .json(&json!({ "title": "No Apk", "description": "Missing file", "apk_path": "" }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "apps")))]
    async fn test_list_apps_modes(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        let all: Vec<AppDTO> = server
            .get("/apps")
            .add_header(AUTHORIZATION, bearer(TESTER))
            .await
            .json();
        assert_eq!(all.len(), 2);
        let developer = all[0].developer.as_ref().expect("developer expanded");
        assert_eq!(developer.email, "developer@test.com");

        let own: Vec<AppDTO> = server
            .get("/apps")
            .add_query_param("mode", "developer")
            .add_header(AUTHORIZATION, bearer(TESTER))
            .await
            .json();
        assert!(own.is_empty(), "Il tester non ha pubblicato app");

        let own: Vec<AppDTO> = server
            .get("/apps?mode=developer")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .json();
        assert_eq!(own.len(), 2);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "apps")))]
    async fn test_download_increments_counter(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        let first: DownloadDTO = server
            .get("/apps/download/1")
            .add_header(AUTHORIZATION, bearer(TESTER))
            .await
            .json();
        assert_eq!(first.downloads, 4);
        assert_eq!(first.file_name, "Fitness Tracker Pro.apk");
        assert_eq!(first.apk_path, "uploads/fitness-tracker.apk");

        let second: DownloadDTO = server
            .get("/apps/download/1")
            .add_header(AUTHORIZATION, bearer(CLIENT))
            .await
            .json();
        assert_eq!(second.downloads, 5);

        server
            .get("/apps/download/999")
            .add_header(AUTHORIZATION, bearer(TESTER))
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "apps", "messages")))]
    async fn test_delete_app_ownership(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        server
            .delete("/apps/1")
            .add_header(AUTHORIZATION, bearer(TESTER))
            .await
            .assert_status_forbidden();

        server
            .delete("/apps/999")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .assert_status_not_found();

        server
            .delete("/apps/2")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .assert_status_ok();

        let remaining: Vec<AppDTO> = server
            .get("/apps")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .json();
        assert_eq!(remaining.len(), 1);

        // i messaggi sopravvivono, la conversazione resta elencata
        let conversations: Vec<serde_json::Value> = server
            .get("/chat/conversations")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .json();
        assert_eq!(conversations.len(), 2);
        Ok(())
    }

    // ============================================================
    // Test per /reviews
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "apps", "reviews")))]
    async fn test_list_reviews_oldest_first(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        let reviews: Vec<ReviewDTO> = server
            .get("/reviews/1")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .json();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, 1);
        assert_eq!(
            reviews[0].tester.as_ref().map(|t| t.full_name.as_str()),
            Some("Jane Tester")
        );
        assert!(reviews[0].created_at <= reviews[1].created_at);

        let empty: Vec<ReviewDTO> = server
            .get("/reviews/2")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .json();
        assert!(empty.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "apps", "reviews")))]
    async fn test_create_review(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        let response = server
            .post("/reviews")
            .add_header(AUTHORIZATION, bearer(NEWCOMER))
            .json(&json!({ "app_id": 2, "content": "Clean UI, fast sync." }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let review: ReviewDTO = response.json();
        assert_eq!(review.rating, 5, "Rating di default");
        assert_eq!(review.tester_id, NEWCOMER);

        let reviews: Vec<ReviewDTO> = server
            .get("/reviews/2")
            .add_header(AUTHORIZATION, bearer(DEVELOPER))
            .await
            .json();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].content, "Clean UI, fast sync.");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "apps")))]
    async fn test_create_review_validation(pool: SqlitePool) -> sqlx::Result<()> {
        let server = setup(pool);

        let bodies = [
            json!({ "app_id": 1, "rating": 0, "content": "too low" }),
            json!({ "app_id": 1, "rating": 6, "content": "too high" }),
            json!({ "app_id": 1, "rating": 3, "content": " " }),
            json!({ "app_id": 999, "rating": 3, "content": "unknown app" }),
        ];

        for body in bodies {
            server
                .post("/reviews")
                .add_header(AUTHORIZATION, bearer(TESTER))
                .json(&body)
                .await
                .assert_status_bad_request();
        }
        Ok(())
    }
}
