//! ReviewRepository - Repository per le recensioni dei tester

use super::Create;
use crate::dtos::CreateReviewDTO;
use crate::entities::{Review, ReviewWithTester};
use sqlx::{Error, SqlitePool};

// REVIEW REPO
pub struct ReviewRepository {
    connection_pool: SqlitePool,
}

impl ReviewRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Recensioni di un'app, dalla più vecchia alla più recente
    pub async fn find_by_app(&self, app_id: &i32) -> Result<Vec<ReviewWithTester>, Error> {
        sqlx::query_as::<_, ReviewWithTester>(
            r#"
            SELECT
                rv.review_id, rv.app_id, rv.tester_id,
                u.full_name AS tester_name,
                u.email AS tester_email,
                rv.rating, rv.content, rv.image, rv.created_at
            FROM reviews rv
            JOIN users u ON u.user_id = rv.tester_id
            WHERE rv.app_id = ?
            ORDER BY rv.created_at ASC, rv.review_id ASC
            "#,
        )
        .bind(app_id)
        .fetch_all(&self.connection_pool)
        .await
    }
}

impl Create<Review, CreateReviewDTO> for ReviewRepository {
    async fn create(&self, data: &CreateReviewDTO) -> Result<Review, Error> {
        let result = sqlx::query(
            "INSERT INTO reviews (app_id, tester_id, rating, content, image, created_at) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(data.app_id)
        .bind(data.tester_id)
        .bind(data.rating)
        .bind(&data.content)
        .bind(&data.image)
        .bind(data.created_at)
        .execute(&self.connection_pool)
        .await?;

        Ok(Review {
            review_id: result.last_insert_rowid() as i32,
            app_id: data.app_id,
            tester_id: data.tester_id,
            rating: data.rating,
            content: data.content.clone(),
            image: data.image.clone(),
            created_at: data.created_at,
        })
    }
}
