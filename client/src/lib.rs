//! Client BetaLink: chiamate HTTP autenticate e polling dei thread di chat

pub mod api;
pub mod error;
pub mod models;
pub mod poller;
pub mod session;

pub use api::ApiClient;
pub use error::ClientError;
pub use poller::{DEFAULT_POLL_INTERVAL, MessageSink, ThreadPoller, ThreadSource};
pub use session::Session;
