//! App entity - Entità app caricata da uno sviluppatore

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct App {
    pub app_id: i32,
    pub title: String,
    pub description: String,
    pub logo_path: String,
    pub apk_path: String,
    pub developer_id: i32,
    pub downloads: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct AppWithDeveloper {
    pub app_id: i32,
    pub title: String,
    pub description: String,
    pub logo_path: String,
    pub apk_path: String,
    pub developer_id: i32,
    pub developer_name: String,
    pub developer_email: String,
    pub downloads: i64,
    pub created_at: DateTime<Utc>,
}
