//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserShort},
};

const SELECT_USER: &str =
    "SELECT id, first_name, last_name, name, email, password, role, created_at FROM users";

/// Fields of a user about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        let query = format!("{} WHERE id = $1", SELECT_USER);
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by email (authentication key)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let query = format!("{} WHERE LOWER(email) = LOWER($1)", SELECT_USER);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn create(&self, user: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, name, email, password, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, name, email, password, role, created_at
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match AppError::from_write(e) {
            AppError::Conflict(_) => AppError::Conflict("User with this email already exists".to_string()),
            other => other,
        })
    }

    /// `{id, name}` of every user, for chief engineer pickers
    pub async fn lookup(&self) -> AppResult<Vec<UserShort>> {
        let rows = sqlx::query_as::<_, UserShort>("SELECT id, name FROM users ORDER BY name ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
