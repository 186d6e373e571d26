//! BetaLink server library - espone i moduli principali per i test

pub mod conversations;
pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// Migrazioni incluse nel binario
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Crea il pool SQLite (foreign key attive) e applica le migrazioni
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;
    Ok(pool)
}

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes(state.clone()))
        .nest("/apps", configure_app_routes(state.clone()))
        .nest("/reviews", configure_review_routes(state.clone()))
        .nest("/chat", configure_chat_routes(state.clone()))
        .with_state(state)
}

/// Configura le routes di autenticazione (signup, login pubbliche; verify, profile autenticate)
fn configure_auth_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    let public_routes = Router::new()
        .route("/signup", post(signup_user))
        .route("/login", post(login_user));

    let private_routes = Router::new()
        .route("/verify", get(verify_token))
        .route("/profile", put(update_profile))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(private_routes)
}

/// Configura le routes per la gestione delle app
fn configure_app_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_apps).post(create_app))
        .route("/download/{app_id}", get(download_app))
        .route("/{app_id}", delete(delete_app))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes per le recensioni
fn configure_review_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", post(create_review))
        .route("/{app_id}", get(list_reviews))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Configura le routes della chat (polling: nessun canale push)
fn configure_chat_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", post(send_message))
        .route("/conversations", get(list_conversations))
        .route("/{partner_id}", get(get_thread))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
