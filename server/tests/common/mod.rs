#![allow(dead_code)]

use axum_test::TestServer;
use betalink_server::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

// Utenti dei fixtures (fixtures/users.sql)
pub const DEVELOPER: i32 = 1;
pub const TESTER: i32 = 2;
pub const CLIENT: i32 = 3;
pub const NEWCOMER: i32 = 4;

/// Crea un AppState per i test
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool, JWT_SECRET.to_string()))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = betalink_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Crea direttamente un TestServer a partire dal pool
pub fn setup(pool: SqlitePool) -> TestServer {
    create_test_server(create_test_state(pool))
}

/// Genera un JWT token valido per testing
pub fn create_test_jwt(user_id: i32, email: &str) -> String {
    betalink_server::auth::encode_jwt(email.to_string(), user_id, JWT_SECRET)
        .expect("Failed to create JWT token")
}

/// Valore dell'header Authorization per uno degli utenti dei fixtures
pub fn bearer(user_id: i32) -> String {
    let email = match user_id {
        DEVELOPER => "developer@test.com",
        TESTER => "tester@test.com",
        CLIENT => "client@test.com",
        _ => "newcomer@test.com",
    };
    format!("Bearer {}", create_test_jwt(user_id, email))
}
