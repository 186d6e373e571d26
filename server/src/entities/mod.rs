//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database; le varianti "espanse" aggiungono
//! i campi di visualizzazione ottenuti tramite JOIN (nome, email, titolo app).

pub mod app;
pub mod enums;
pub mod message;
pub mod review;
pub mod user;

// Re-exports per facilitare l'import
pub use app::{App, AppWithDeveloper};
pub use enums::UserRole;
pub use message::{ExpandedMessage, Message};
pub use review::{Review, ReviewWithTester};
pub use user::User;
