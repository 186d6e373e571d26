//! Auth services - Registrazione, login e profilo utente

use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{AuthResponseDTO, CreateUserDTO, LoginDTO, SignupDTO, UpdateUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::{Create, Update};
use axum::{
    Extension,
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

fn bearer_headers(token: &str) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| AppError::internal_server_error("Failed to build authorization header"))?;
    headers.insert(header::AUTHORIZATION, value);
    Ok(headers)
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn signup_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Signup request received");
    // 1. Validare il body (nome non vuoto, email valida, password >= 6 caratteri)
    // 2. Rifiutare email già registrate con BAD_REQUEST
    // 3. Hashare la password e salvare l'utente (ruolo di default: client)
    // 4. Generare il token e ritornare 201 con token e utente

    body.validate()?;

    if state.user.find_by_email(&body.email).await?.is_some() {
        warn!("User already exists");
        return Err(AppError::bad_request("User with this email already exists"));
    }

    let password_hash = User::hash_password(&body.password)?;

    let new_user = CreateUserDTO {
        full_name: body.full_name,
        email: body.email,
        password: password_hash,
        role: body.role.unwrap_or_default(),
    };

    let created_user = state.user.create(&new_user).await?;
    let token = encode_jwt(created_user.email.clone(), created_user.user_id, &state.jwt_secret)?;
    let headers = bearer_headers(&token)?;

    info!("User {} registered successfully", created_user.user_id);
    Ok((
        StatusCode::CREATED,
        headers,
        Json(AuthResponseDTO {
            token,
            user: UserDTO::from(created_user),
        }),
    ))
}

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Login attempt");
    // 1. Validare il body
    // 2. Cercare l'utente per email, UNAUTHORIZED se non esiste
    // 3. Verificare la password, UNAUTHORIZED se non corrisponde (stesso messaggio del punto 2)
    // 4. Generare il token, ritornarlo nel body e nell'header Authorization

    body.validate()?;

    let user = match state.user.find_by_email(&body.email).await? {
        Some(user) => user,
        None => {
            warn!("Login failed: unknown email");
            return Err(AppError::unauthorized("Invalid email or password"));
        }
    };

    if !user.verify_password(&body.password) {
        warn!("Login failed: wrong password for user {}", user.user_id);
        return Err(AppError::unauthorized("Invalid email or password"));
    }

    let token = encode_jwt(user.email.clone(), user.user_id, &state.jwt_secret)?;
    let headers = bearer_headers(&token)?;

    info!("User {} logged in", user.user_id);
    Ok((
        StatusCode::OK,
        headers,
        Json(AuthResponseDTO {
            token,
            user: UserDTO::from(user),
        }),
    ))
}

#[instrument(skip(current_user), fields(user_id = %current_user.user_id))]
pub async fn verify_token(
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<impl IntoResponse, AppError> {
    debug!("Token verified");
    Ok(Json(json!({ "user": UserDTO::from(current_user) })))
}

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id))]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<UpdateUserDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating profile");
    body.validate()?;

    let updated = state.user.update(&current_user.user_id, &body).await?;

    info!("Profile updated");
    Ok(Json(json!({
        "message": "Profile updated successfully",
        "user": UserDTO::from(updated),
    })))
}
