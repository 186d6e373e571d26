//! Conversation DTO - Riepilogo (non persistito) di una conversazione con un partner

use super::message::{AppRefDTO, ParticipantDTO};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConversationDTO {
    pub partner: ParticipantDTO,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppRefDTO>,
    pub unread_count: u32,
}
