//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//!
//! Le query usano `sqlx::query_as::<_, T>` con entità `#[derive(sqlx::FromRow)]`:
//! il controllo avviene a runtime, così la build non richiede un database raggiungibile.
//! I test d'integrazione (`#[sqlx::test]`) coprono ogni query contro lo schema reale
//! in `migrations/`.

pub mod app;
pub mod message;
pub mod review;
pub mod traits;
pub mod user;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use app::AppRepository;
pub use message::{MessageOrder, MessageRepository};
pub use review::ReviewRepository;
pub use user::UserRepository;
