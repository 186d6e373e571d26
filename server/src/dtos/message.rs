//! Message DTOs - Data Transfer Objects per messaggi diretti

use crate::entities::ExpandedMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Mittente, destinatario o partner di una conversazione
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParticipantDTO {
    pub id: i32,
    pub full_name: String,
    pub email: String,
}

/// Riferimento all'app usata come contesto del messaggio
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppRefDTO {
    pub id: i32,
    pub title: String,
}

/// Struct per gestire io col client.
/// Il flag `read` non fa parte della risposta.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageDTO {
    pub message_id: i32,
    pub sender: ParticipantDTO,
    pub recipient: ParticipantDTO,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<AppRefDTO>,
    pub created_at: DateTime<Utc>,
}

impl ExpandedMessage {
    pub fn sender_dto(&self) -> ParticipantDTO {
        ParticipantDTO {
            id: self.sender_id,
            full_name: self.sender_name.clone(),
            email: self.sender_email.clone(),
        }
    }

    pub fn recipient_dto(&self) -> ParticipantDTO {
        ParticipantDTO {
            id: self.recipient_id,
            full_name: self.recipient_name.clone(),
            email: self.recipient_email.clone(),
        }
    }

    /// Il contesto app viene omesso se l'app non esiste più
    pub fn app_dto(&self) -> Option<AppRefDTO> {
        match (self.app_id, &self.app_title) {
            (Some(id), Some(title)) => Some(AppRefDTO {
                id,
                title: title.clone(),
            }),
            _ => None,
        }
    }
}

impl From<ExpandedMessage> for MessageDTO {
    fn from(value: ExpandedMessage) -> Self {
        Self {
            message_id: value.message_id,
            sender: value.sender_dto(),
            recipient: value.recipient_dto(),
            app: value.app_dto(),
            content: value.content,
            created_at: value.created_at,
        }
    }
}

/// Body di POST /chat. I campi obbligatori sono Option per poter
/// rispondere 400 (e non 422) quando mancano.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SendMessageDTO {
    pub recipient_id: Option<i32>,
    pub content: Option<String>,
    pub app_id: Option<i32>,
}

/// DTO per creare un nuovo messaggio (senza message_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateMessageDTO {
    pub sender_id: i32,
    pub recipient_id: i32,

    #[validate(
        length(min = 1, message = "Message content is required"),
        custom(function = "super::user::validate_not_blank", message = "Message content cannot be blank")
    )]
    pub content: String,

    pub app_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
