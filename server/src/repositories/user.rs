//! UserRepository - Repository per la gestione degli utenti

use super::{Create, Read, Update};
use crate::dtos::{CreateUserDTO, UpdateUserDTO};
use crate::entities::User;
use chrono::Utc;
use sqlx::{Error, SqlitePool};

const USER_COLUMNS: &str =
    "user_id, full_name, email, password, role, profile_pic, created_at";

// USER REPO
pub struct UserRepository {
    connection_pool: SqlitePool,
}

impl UserRepository {
    pub fn new(connection_pool: SqlitePool) -> UserRepository {
        Self { connection_pool }
    }

    /// L'email è univoca e salvata in minuscolo
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email.trim().to_lowercase())
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(user)
    }
}

impl Create<User, CreateUserDTO> for UserRepository {
    async fn create(&self, data: &CreateUserDTO) -> Result<User, Error> {
        let created_at = Utc::now();
        let email = data.email.trim().to_lowercase();
        let full_name = data.full_name.trim().to_string();

        let result = sqlx::query(
            "INSERT INTO users (full_name, email, password, role, profile_pic, created_at) \
             VALUES (?, ?, ?, ?, '', ?)",
        )
        .bind(&full_name)
        .bind(&email)
        .bind(&data.password)
        .bind(data.role)
        .bind(created_at)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_rowid() as i32;

        Ok(User {
            user_id: new_id,
            full_name,
            email,
            password: data.password.clone(),
            role: data.role,
            profile_pic: String::new(),
            created_at,
        })
    }
}

impl Read<User, i32> for UserRepository {
    async fn read(&self, id: &i32) -> Result<Option<User>, Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = ?");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(user)
    }
}

impl Update<User, UpdateUserDTO, i32> for UserRepository {
    async fn update(&self, id: &i32, data: &UpdateUserDTO) -> Result<User, Error> {
        // First, get the current user to ensure it exists
        let current_user = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.full_name.is_none() && data.profile_pic.is_none() {
            return Ok(current_user);
        }

        // COALESCE: i campi None restano invariati
        sqlx::query(
            "UPDATE users SET full_name = COALESCE(?, full_name), \
             profile_pic = COALESCE(?, profile_pic) WHERE user_id = ?",
        )
        .bind(data.full_name.as_deref().map(str::trim))
        .bind(data.profile_pic.as_deref())
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}
