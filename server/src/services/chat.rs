//! Chat services - Messaggi diretti tra utenti
//!
//! Nessun push: il client scopre i nuovi messaggi rifacendo polling del thread.

use crate::conversations::{aggregate_conversations, sort_by_recent_activity};
use crate::core::{AppError, AppState};
use crate::dtos::{ConversationDTO, CreateMessageDTO, MessageDTO, SendMessageDTO};
use crate::entities::User;
use crate::repositories::{Create, MessageOrder, Read};
use axum::{
    Extension,
    extract::{Json, Path, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id))]
pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<Json<Vec<ConversationDTO>>, AppError> {
    debug!("Listing conversations");
    // 1. Recuperare tutti i messaggi in cui l'utente è mittente o destinatario, dal più recente
    // 2. Raggrupparli per partner (seed = messaggio più recente, non letti su tutto l'insieme)
    // 3. Ordinarli dal più recente e ritornarli

    let messages = state
        .msg
        .find_by_participant(&current_user.user_id, MessageOrder::NewestFirst)
        .await?;

    debug!("User has {} messages", messages.len());

    let mut conversations = aggregate_conversations(current_user.user_id, messages);
    sort_by_recent_activity(&mut conversations);

    info!("Retrieved {} conversations", conversations.len());
    Ok(Json(conversations))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, partner_id = %partner_id))]
pub async fn get_thread(
    State(state): State<Arc<AppState>>,
    Path(partner_id): Path<i32>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Vec<MessageDTO>>, AppError> {
    debug!("Fetching thread");
    // 1. Recuperare i messaggi tra utente corrente e partner, dal più vecchio al più recente
    //    (partner sconosciuto o senza messaggi -> lista vuota, non 404)
    // 2. Segnare come letti i messaggi del partner verso l'utente corrente, sempre
    // 3. Ritornare il thread

    let messages = state
        .msg
        .find_between(&current_user.user_id, &partner_id, MessageOrder::OldestFirst)
        .await?;

    // fetch e mark-read non sono atomici insieme: il flag read non fa parte della risposta
    let marked = state
        .msg
        .mark_read_from(&partner_id, &current_user.user_id)
        .await?;

    info!(
        "Retrieved {} messages, marked {} as read",
        messages.len(),
        marked
    );

    Ok(Json(messages.into_iter().map(MessageDTO::from).collect()))
}

#[debug_handler]
#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, recipient_id = ?body.recipient_id))]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<SendMessageDTO>,
) -> Result<(StatusCode, Json<MessageDTO>), AppError> {
    debug!("Sending message");
    // 1. Verificare che destinatario e contenuto siano presenti, altrimenti BAD_REQUEST
    // 2. Verificare che destinatario (ed eventuale app) esistano, altrimenti BAD_REQUEST
    // 3. Salvare il messaggio (read = false, timestamp del server)
    // 4. Ritornare 201 con il messaggio espanso

    let recipient_id = body.recipient_id.ok_or_else(|| {
        warn!("Message without recipient");
        AppError::bad_request("Recipient is required")
    })?;

    let content = match body.content {
        Some(content) if !content.trim().is_empty() => content,
        _ => {
            warn!("Message without content");
            return Err(AppError::bad_request("Message content is required"));
        }
    };

    // inviare un messaggio a se stessi è permesso
    if state.user.read(&recipient_id).await?.is_none() {
        warn!("Recipient {} does not exist", recipient_id);
        return Err(AppError::bad_request("Recipient not found"));
    }

    if let Some(app_id) = body.app_id {
        if state.app.read(&app_id).await?.is_none() {
            warn!("App {} does not exist", app_id);
            return Err(AppError::bad_request("App not found"));
        }
    }

    let create_dto = CreateMessageDTO {
        sender_id: current_user.user_id,
        recipient_id,
        content,
        app_id: body.app_id,
        created_at: Utc::now(),
    };
    create_dto.validate()?;

    let saved = state.msg.create(&create_dto).await?;

    let expanded = state
        .msg
        .read_expanded(&saved.message_id)
        .await?
        .ok_or_else(|| AppError::internal_server_error("Message not found after insert"))?;

    info!("Message {} sent", saved.message_id);
    Ok((StatusCode::CREATED, Json(MessageDTO::from(expanded))))
}
