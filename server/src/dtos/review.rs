//! Review DTOs - Data Transfer Objects per recensioni

use super::message::ParticipantDTO;
use crate::entities::{Review, ReviewWithTester};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReviewDTO {
    pub id: i32,
    pub app_id: i32,
    pub tester_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tester: Option<ParticipantDTO>,
    pub rating: i32,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewDTO {
    fn from(value: Review) -> Self {
        Self {
            id: value.review_id,
            app_id: value.app_id,
            tester_id: value.tester_id,
            tester: None,
            rating: value.rating,
            content: value.content,
            image: value.image,
            created_at: value.created_at,
        }
    }
}

impl From<ReviewWithTester> for ReviewDTO {
    fn from(value: ReviewWithTester) -> Self {
        Self {
            id: value.review_id,
            app_id: value.app_id,
            tester_id: value.tester_id,
            tester: Some(ParticipantDTO {
                id: value.tester_id,
                full_name: value.tester_name,
                email: value.tester_email,
            }),
            rating: value.rating,
            content: value.content,
            image: value.image,
            created_at: value.created_at,
        }
    }
}

/// Body di POST /reviews
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct NewReviewDTO {
    pub app_id: i32,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,

    #[validate(custom(function = "super::user::validate_not_blank", message = "Review content is required"))]
    pub content: String,

    pub image: Option<String>,
}

/// DTO per creare una nuova recensione (senza review_id)
#[derive(Debug, Clone)]
pub struct CreateReviewDTO {
    pub app_id: i32,
    pub tester_id: i32,
    pub rating: i32,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}
