//! App services - Pubblicazione, elenco, download e cancellazione delle app

use crate::core::{AppError, AppState};
use crate::dtos::{AppDTO, AppsQuery, CreateAppDTO, DownloadDTO};
use crate::entities::User;
use crate::repositories::app::NewApp;
use crate::repositories::{Create, Delete, Read};
use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use axum_macros::debug_handler;
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state, current_user, body), fields(user_id = %current_user.user_id, title = %body.title))]
pub async fn create_app(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Json(body): Json<CreateAppDTO>,
) -> Result<(StatusCode, Json<AppDTO>), AppError> {
    debug!("Publishing new app");
    body.validate()?;

    let new_app = NewApp {
        title: body.title.trim().to_string(),
        description: body.description,
        logo_path: body.logo_path.unwrap_or_default(),
        apk_path: body.apk_path,
        developer_id: current_user.user_id,
        created_at: Utc::now(),
    };

    let app = state.app.create(&new_app).await?;

    info!("App {} published", app.app_id);
    Ok((StatusCode::CREATED, Json(AppDTO::from(app))))
}

#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, mode = ?params.mode))]
pub async fn list_apps(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<User>,
    Query(params): Query<AppsQuery>, // ?mode=developer -> solo le app dell'utente corrente
) -> Result<Json<Vec<AppDTO>>, AppError> {
    debug!("Listing apps");
    let developer_filter = params.developer_mode().then_some(current_user.user_id);

    let apps = state.app.find_all(developer_filter).await?;

    info!("Found {} apps", apps.len());
    Ok(Json(apps.into_iter().map(AppDTO::from).collect()))
}

/// Registra un download. Il trasferimento del file è a carico di chi serve `apk_path`.
#[instrument(skip(state), fields(app_id = %app_id))]
pub async fn download_app(
    State(state): State<Arc<AppState>>,
    Path(app_id): Path<i32>,
) -> Result<Json<DownloadDTO>, AppError> {
    debug!("Registering download");
    let app = state.app.increment_downloads(&app_id).await?.ok_or_else(|| {
        warn!("App not found");
        AppError::not_found("App not found")
    })?;

    info!("App downloaded {} times", app.downloads);
    Ok(Json(DownloadDTO::from(app)))
}

#[debug_handler]
#[instrument(skip(state, current_user), fields(user_id = %current_user.user_id, app_id = %app_id))]
pub async fn delete_app(
    State(state): State<Arc<AppState>>,
    Path(app_id): Path<i32>,
    Extension(current_user): Extension<User>,
) -> Result<Json<Value>, AppError> {
    debug!("Deleting app");
    // 1. Verificare che l'app esista, altrimenti NOT_FOUND
    // 2. Solo lo sviluppatore che l'ha pubblicata può cancellarla, altrimenti FORBIDDEN
    // 3. Cancellare l'app (le recensioni vengono cancellate in cascata)

    let app = state.app.read(&app_id).await?.ok_or_else(|| {
        warn!("App not found");
        AppError::not_found("App not found")
    })?;

    if app.developer_id != current_user.user_id {
        warn!("User is not the developer of app {}", app_id);
        return Err(AppError::forbidden("Not authorized to delete this app"));
    }

    state.app.delete(&app_id).await?;

    info!("App deleted");
    Ok(Json(json!({ "message": "App deleted successfully" })))
}
