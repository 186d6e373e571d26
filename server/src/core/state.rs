//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository e la configurazione condivisa necessaria
//! per gestire le richieste. Il pool è l'unica risorsa condivisa.

use crate::repositories::{AppRepository, MessageRepository, ReviewRepository, UserRepository};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti
    pub user: UserRepository,

    /// Repository per la gestione delle app
    pub app: AppRepository,

    /// Repository per la gestione delle recensioni
    pub review: ReviewRepository,

    /// Repository per la gestione dei messaggi
    pub msg: MessageRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    pub fn new(pool: SqlitePool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            app: AppRepository::new(pool.clone()),
            review: ReviewRepository::new(pool.clone()),
            msg: MessageRepository::new(pool),
            jwt_secret,
        }
    }
}
