//! MessageRepository - Repository per la gestione dei messaggi diretti
//!
//! Solo persistenza, nessuna logica di business: inserimento, ricerca per partecipante,
//! ricerca tra due utenti e marcatura "letto" in blocco.

use super::{Create, Read};
use crate::dtos::CreateMessageDTO;
use crate::entities::{ExpandedMessage, Message};
use sqlx::{Error, SqlitePool};
use validator::Validate;

/// Ordinamento per data di creazione; a parità di timestamp decide l'id autoincrementale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOrder {
    OldestFirst,
    NewestFirst,
}

impl MessageOrder {
    fn sql(self) -> &'static str {
        match self {
            MessageOrder::OldestFirst => "m.created_at ASC, m.message_id ASC",
            MessageOrder::NewestFirst => "m.created_at DESC, m.message_id DESC",
        }
    }
}

// SELECT comune: ogni messaggio espanso con nome/email di mittente e destinatario e titolo app
const EXPANDED_SELECT: &str = r#"
    SELECT
        m.message_id,
        m.sender_id,
        s.full_name AS sender_name,
        s.email AS sender_email,
        m.recipient_id,
        r.full_name AS recipient_name,
        r.email AS recipient_email,
        m.content,
        m.app_id,
        a.title AS app_title,
        m.read,
        m.created_at
    FROM messages m
    JOIN users s ON s.user_id = m.sender_id
    JOIN users r ON r.user_id = m.recipient_id
    LEFT JOIN apps a ON a.app_id = m.app_id
"#;

// MESSAGE REPO
pub struct MessageRepository {
    connection_pool: SqlitePool,
}

impl MessageRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Tutti i messaggi in cui `user_id` è mittente o destinatario, senza paginazione
    pub async fn find_by_participant(
        &self,
        user_id: &i32,
        order: MessageOrder,
    ) -> Result<Vec<ExpandedMessage>, Error> {
        let query = format!(
            "{EXPANDED_SELECT} WHERE m.sender_id = ? OR m.recipient_id = ? ORDER BY {}",
            order.sql()
        );

        let messages = sqlx::query_as::<_, ExpandedMessage>(&query)
            .bind(user_id)
            .bind(user_id)
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(messages)
    }

    /// Thread tra due utenti: messaggi da `user_a` a `user_b` e viceversa
    pub async fn find_between(
        &self,
        user_a: &i32,
        user_b: &i32,
        order: MessageOrder,
    ) -> Result<Vec<ExpandedMessage>, Error> {
        let query = format!(
            "{EXPANDED_SELECT} \
             WHERE (m.sender_id = ? AND m.recipient_id = ?) \
                OR (m.sender_id = ? AND m.recipient_id = ?) \
             ORDER BY {}",
            order.sql()
        );

        let messages = sqlx::query_as::<_, ExpandedMessage>(&query)
            .bind(user_a)
            .bind(user_b)
            .bind(user_b)
            .bind(user_a)
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(messages)
    }

    /// Un singolo messaggio espanso, usato per rispondere dopo l'invio
    pub async fn read_expanded(&self, id: &i32) -> Result<Option<ExpandedMessage>, Error> {
        let query = format!("{EXPANDED_SELECT} WHERE m.message_id = ?");

        sqlx::query_as::<_, ExpandedMessage>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }

    /// Segna come letti tutti i messaggi non letti inviati da `sender_id` a `recipient_id`.
    /// Restituisce il numero di righe modificate: una seconda chiamata consecutiva restituisce 0.
    pub async fn mark_read_from(&self, sender_id: &i32, recipient_id: &i32) -> Result<u64, Error> {
        let result = sqlx::query(
            "UPDATE messages SET read = 1 WHERE sender_id = ? AND recipient_id = ? AND read = 0",
        )
        .bind(sender_id)
        .bind(recipient_id)
        .execute(&self.connection_pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_unread_from(&self, sender_id: &i32, recipient_id: &i32) -> Result<i64, Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE sender_id = ? AND recipient_id = ? AND read = 0",
        )
        .bind(sender_id)
        .bind(recipient_id)
        .fetch_one(&self.connection_pool)
        .await
    }
}

impl Create<Message, CreateMessageDTO> for MessageRepository {
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        // ultima linea di difesa: il service valida già il body
        data.validate()
            .map_err(|e| Error::Protocol(format!("invalid message: {e}")))?;

        let result = sqlx::query(
            "INSERT INTO messages (sender_id, recipient_id, content, app_id, read, created_at) \
             VALUES (?, ?, ?, ?, 0, ?)",
        )
        .bind(data.sender_id)
        .bind(data.recipient_id)
        .bind(&data.content)
        .bind(data.app_id)
        .bind(data.created_at)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;

        Ok(Message {
            message_id: new_id,
            sender_id: data.sender_id,
            recipient_id: data.recipient_id,
            content: data.content.clone(),
            app_id: data.app_id,
            read: false,
            created_at: data.created_at,
        })
    }
}

impl Read<Message, i32> for MessageRepository {
    async fn read(&self, id: &i32) -> Result<Option<Message>, Error> {
        sqlx::query_as::<_, Message>(
            "SELECT message_id, sender_id, recipient_id, content, app_id, read, created_at \
             FROM messages WHERE message_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
    }
}
