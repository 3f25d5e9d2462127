//! Set types repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::set_type::{SetType, SetTypePayload},
};

#[derive(Clone)]
pub struct SetTypesRepository {
    pool: Pool<Postgres>,
}

impl SetTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<SetType>> {
        let rows = sqlx::query_as::<_, SetType>(
            "SELECT set_type_id, set_type_name FROM set_types ORDER BY set_type_name ASC, set_type_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<SetType> {
        sqlx::query_as::<_, SetType>("SELECT set_type_id, set_type_name FROM set_types WHERE set_type_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Set type {} not found", id)))
    }

    pub async fn create(&self, data: &SetTypePayload) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO set_types (set_type_name) VALUES ($1) RETURNING set_type_id",
        )
        .bind(&data.set_type_name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    pub async fn update(&self, id: i32, data: &SetTypePayload) -> AppResult<()> {
        let result = sqlx::query("UPDATE set_types SET set_type_name = $1 WHERE set_type_id = $2")
            .bind(&data.set_type_name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Set type {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM set_types WHERE set_type_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Set type {} not found", id)));
        }
        Ok(())
    }
}
