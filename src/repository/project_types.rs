//! Project types repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::project_type::{ProjectType, ProjectTypePayload},
};

const SELECT_PROJECT_TYPE: &str =
    "SELECT project_type_id, project_type_name, neaktor_id FROM project_types";

#[derive(Clone)]
pub struct ProjectTypesRepository {
    pool: Pool<Postgres>,
}

impl ProjectTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<ProjectType>> {
        let query = format!("{} ORDER BY project_type_name ASC, project_type_id ASC", SELECT_PROJECT_TYPE);
        let rows = sqlx::query_as::<_, ProjectType>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ProjectType> {
        let query = format!("{} WHERE project_type_id = $1", SELECT_PROJECT_TYPE);
        sqlx::query_as::<_, ProjectType>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project type {} not found", id)))
    }

    pub async fn create(&self, data: &ProjectTypePayload) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO project_types (project_type_name, neaktor_id)
            VALUES ($1, NULLIF($2, ''))
            RETURNING project_type_id
            "#,
        )
        .bind(&data.project_type_name)
        .bind(&data.neaktor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    pub async fn update(&self, id: i32, data: &ProjectTypePayload) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE project_types
            SET project_type_name = $1, neaktor_id = NULLIF($2, '')
            WHERE project_type_id = $3
            "#,
        )
        .bind(&data.project_type_name)
        .bind(&data.neaktor_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project type {} not found", id)));
        }
        Ok(())
    }

    /// Projects of a deleted type keep existing with no type
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM project_types WHERE project_type_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project type {} not found", id)));
        }
        Ok(())
    }
}
