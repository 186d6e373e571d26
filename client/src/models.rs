//! Strutture scambiate con il server BetaLink

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub profile_pic: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub full_name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppRef {
    pub id: i32,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub message_id: i32,
    pub sender: Participant,
    pub recipient: Participant,
    pub content: String,
    #[serde(default)]
    pub app: Option<AppRef>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Conversation {
    pub partner: Participant,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    #[serde(default)]
    pub app: Option<AppRef>,
    pub unread_count: u32,
}

/// Body di POST /chat
#[derive(Serialize, Debug, Clone)]
pub struct NewMessage {
    pub recipient_id: i32,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<i32>,
}

#[derive(Serialize, Debug, Clone)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct Signup {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_from_server_response() {
        let body: ErrorBody = serde_json::from_value(json!({
            "error": "Validation error",
            "details": "content: Message content is required"
        }))
        .unwrap();
        assert_eq!(body.error, "Validation error");
    }

    #[test]
    fn test_conversation_without_app_context() {
        let conversation: Conversation = serde_json::from_value(json!({
            "partner": { "id": 3, "full_name": "Carl Client", "email": "client@test.com" },
            "last_message": "Is there an iOS build?",
            "last_message_time": "2025-01-04T11:00:00Z",
            "unread_count": 1
        }))
        .unwrap();
        assert!(conversation.app.is_none());
        assert_eq!(conversation.partner.id, 3);
    }

    #[test]
    fn test_new_message_omits_missing_app() {
        let body = serde_json::to_value(NewMessage {
            recipient_id: 2,
            content: "hello".into(),
            app_id: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "recipient_id": 2, "content": "hello" }));
    }
}
