//! Query DTOs - Data Transfer Objects per query string

use serde::{Deserialize, Serialize};

/// Query parameters di GET /apps (`?mode=developer` restituisce solo le proprie app)
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AppsQuery {
    #[serde(default)]
    pub mode: Option<String>,
}

impl AppsQuery {
    pub fn developer_mode(&self) -> bool {
        self.mode.as_deref() == Some("developer")
    }
}
