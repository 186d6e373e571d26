//! User DTOs - Data Transfer Objects per utenti

use crate::entities::{User, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserDTO {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub profile_pic: String,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.user_id,
            full_name: value.full_name,
            email: value.email,
            role: value.role,
            profile_pic: value.profile_pic,
            // la password non viene mai esposta al client
        }
    }
}

/// Body della registrazione
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct SignupDTO {
    #[validate(custom(function = "validate_not_blank", message = "Full name is required"))]
    pub full_name: String,

    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub role: Option<UserRole>,
}

/// Body del login
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct LoginDTO {
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// DTO per creare un nuovo utente (senza user_id, password già hashata)
#[derive(Debug, Clone)]
pub struct CreateUserDTO {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// DTO per aggiornare il profilo (solo campi modificabili)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateUserDTO {
    #[validate(custom(function = "validate_not_blank", message = "Full name cannot be empty"))]
    pub full_name: Option<String>,
    pub profile_pic: Option<String>,
}

/// Risposta di signup e login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponseDTO {
    pub token: String,
    pub user: UserDTO,
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
