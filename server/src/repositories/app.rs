//! AppRepository - Repository per la gestione delle app caricate dagli sviluppatori

use super::{Create, Delete, Read};
use crate::entities::{App, AppWithDeveloper};
use chrono::{DateTime, Utc};
use sqlx::{Error, SqlitePool};

const APP_COLUMNS: &str =
    "app_id, title, description, logo_path, apk_path, developer_id, downloads, created_at";

const APP_WITH_DEVELOPER_SELECT: &str = r#"
    SELECT
        a.app_id, a.title, a.description, a.logo_path, a.apk_path, a.developer_id,
        u.full_name AS developer_name,
        u.email AS developer_email,
        a.downloads, a.created_at
    FROM apps a
    JOIN users u ON u.user_id = a.developer_id
"#;

/// Dati per inserire una nuova app (senza app_id e downloads)
#[derive(Debug, Clone)]
pub struct NewApp {
    pub title: String,
    pub description: String,
    pub logo_path: String,
    pub apk_path: String,
    pub developer_id: i32,
    pub created_at: DateTime<Utc>,
}

// APP REPO
pub struct AppRepository {
    connection_pool: SqlitePool,
}

impl AppRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Tutte le app, oppure solo quelle di uno sviluppatore
    pub async fn find_all(&self, developer_id: Option<i32>) -> Result<Vec<AppWithDeveloper>, Error> {
        let apps = match developer_id {
            Some(developer_id) => {
                let query = format!(
                    "{APP_WITH_DEVELOPER_SELECT} WHERE a.developer_id = ? ORDER BY a.created_at DESC, a.app_id DESC"
                );
                sqlx::query_as::<_, AppWithDeveloper>(&query)
                    .bind(developer_id)
                    .fetch_all(&self.connection_pool)
                    .await?
            }
            None => {
                let query = format!(
                    "{APP_WITH_DEVELOPER_SELECT} ORDER BY a.created_at DESC, a.app_id DESC"
                );
                sqlx::query_as::<_, AppWithDeveloper>(&query)
                    .fetch_all(&self.connection_pool)
                    .await?
            }
        };

        Ok(apps)
    }

    /// Incrementa il contatore dei download e restituisce l'app aggiornata
    pub async fn increment_downloads(&self, id: &i32) -> Result<Option<App>, Error> {
        let result = sqlx::query("UPDATE apps SET downloads = downloads + 1 WHERE app_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.read(id).await
    }
}

impl Create<App, NewApp> for AppRepository {
    async fn create(&self, data: &NewApp) -> Result<App, Error> {
        let result = sqlx::query(
            "INSERT INTO apps (title, description, logo_path, apk_path, developer_id, downloads, created_at) \
             VALUES (?, ?, ?, ?, ?, 0, ?)",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.logo_path)
        .bind(&data.apk_path)
        .bind(data.developer_id)
        .bind(data.created_at)
        .execute(&self.connection_pool)
        .await?;

        Ok(App {
            app_id: result.last_insert_rowid() as i32,
            title: data.title.clone(),
            description: data.description.clone(),
            logo_path: data.logo_path.clone(),
            apk_path: data.apk_path.clone(),
            developer_id: data.developer_id,
            downloads: 0,
            created_at: data.created_at,
        })
    }
}

impl Read<App, i32> for AppRepository {
    async fn read(&self, id: &i32) -> Result<Option<App>, Error> {
        let query = format!("SELECT {APP_COLUMNS} FROM apps WHERE app_id = ?");
        sqlx::query_as::<_, App>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}

impl Delete<i32> for AppRepository {
    /// Le recensioni vengono cancellate in cascata, i messaggi perdono solo il contesto app
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query("DELETE FROM apps WHERE app_id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "apps")))]
    async fn test_find_all_filters_by_developer(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = AppRepository::new(pool);

        let all = repo.find_all(None).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].developer_name, "John Developer");

        let none = repo.find_all(Some(2)).await?;
        assert!(none.is_empty());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("users", "apps")))]
    async fn test_increment_downloads(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = AppRepository::new(pool);

        let app = repo.increment_downloads(&1).await?.expect("app exists");
        assert_eq!(app.downloads, 4);
        assert!(repo.increment_downloads(&42).await?.is_none());
        Ok(())
    }
}
