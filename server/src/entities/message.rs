//! Message entity - Entità messaggio diretto tra due utenti

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct Message {
    pub message_id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub content: String,
    // contesto opzionale: l'app di cui si sta parlando
    pub app_id: Option<i32>,
    // passa solo da false a true, mai il contrario
    pub read: bool,
    // assegnato dal server all'inserimento, immutabile
    pub created_at: DateTime<Utc>,
}

/// Messaggio con i campi di visualizzazione di mittente, destinatario e app
#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct ExpandedMessage {
    pub message_id: i32,
    pub sender_id: i32,
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_id: i32,
    pub recipient_name: String,
    pub recipient_email: String,
    pub content: String,
    pub app_id: Option<i32>,
    // None anche quando l'app referenziata non esiste più
    pub app_title: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl ExpandedMessage {
    /// Restituisce l'id della controparte rispetto a `user_id`.
    /// Per un messaggio inviato a se stessi la controparte è l'utente stesso.
    pub fn partner_of(&self, user_id: i32) -> i32 {
        if self.sender_id == user_id {
            self.recipient_id
        } else {
            self.sender_id
        }
    }

    pub fn is_unread_for(&self, user_id: i32) -> bool {
        self.recipient_id == user_id && !self.read
    }
}
