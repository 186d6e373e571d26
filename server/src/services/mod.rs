//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod app;
pub mod auth;
pub mod chat;
pub mod review;

// Re-exports per facilitare l'import
pub use app::{create_app, delete_app, download_app, list_apps};
pub use auth::{login_user, signup_user, update_profile, verify_token};
pub use chat::{get_thread, list_conversations, send_message};
pub use review::{create_review, list_reviews};

use crate::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "BetaLink API is running",
            "timestamp": Utc::now(),
        })),
    )
}
