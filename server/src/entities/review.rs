//! Review entity - Recensione di un tester su un'app

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Review {
    pub review_id: i32,
    pub app_id: i32,
    pub tester_id: i32,
    pub rating: i32,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct ReviewWithTester {
    pub review_id: i32,
    pub app_id: i32,
    pub tester_id: i32,
    pub tester_name: String,
    pub tester_email: String,
    pub rating: i32,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}
