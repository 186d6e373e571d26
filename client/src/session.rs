use crate::models::User;

/// Sessione autenticata: token JWT e utente a cui appartiene.
/// Viene passata esplicitamente a ogni chiamata che richiede autenticazione.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn user_id(&self) -> i32 {
        self.user.id
    }

    /// Valore dell'header Authorization
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
