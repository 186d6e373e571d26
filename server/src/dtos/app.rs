//! App DTOs - Data Transfer Objects per le app

use super::message::ParticipantDTO;
use crate::entities::{App, AppWithDeveloper};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppDTO {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub logo_path: String,
    pub apk_path: String,
    pub developer_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<ParticipantDTO>,
    pub downloads: i64,
    pub created_at: DateTime<Utc>,
}

impl From<App> for AppDTO {
    fn from(value: App) -> Self {
        Self {
            id: value.app_id,
            title: value.title,
            description: value.description,
            logo_path: value.logo_path,
            apk_path: value.apk_path,
            developer_id: value.developer_id,
            developer: None,
            downloads: value.downloads,
            created_at: value.created_at,
        }
    }
}

impl From<AppWithDeveloper> for AppDTO {
    fn from(value: AppWithDeveloper) -> Self {
        Self {
            id: value.app_id,
            title: value.title,
            description: value.description,
            logo_path: value.logo_path,
            apk_path: value.apk_path,
            developer_id: value.developer_id,
            developer: Some(ParticipantDTO {
                id: value.developer_id,
                full_name: value.developer_name,
                email: value.developer_email,
            }),
            downloads: value.downloads,
            created_at: value.created_at,
        }
    }
}

/// Body di POST /apps. Il file APK è già stato salvato: qui arriva solo il path.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAppDTO {
    #[validate(custom(function = "super::user::validate_not_blank", message = "App title is required"))]
    pub title: String,

    #[validate(custom(function = "super::user::validate_not_blank", message = "App description is required"))]
    pub description: String,

    #[validate(custom(function = "super::user::validate_not_blank", message = "APK file is required"))]
    pub apk_path: String,

    #[serde(default)]
    pub logo_path: Option<String>,
}

/// Risposta di GET /apps/download/{app_id}
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DownloadDTO {
    pub app_id: i32,
    pub title: String,
    pub apk_path: String,
    pub file_name: String,
    pub downloads: i64,
}

impl From<App> for DownloadDTO {
    fn from(value: App) -> Self {
        Self {
            file_name: format!("{}.apk", value.title),
            app_id: value.app_id,
            title: value.title,
            apk_path: value.apk_path,
            downloads: value.downloads,
        }
    }
}
