//! Equipment association rows for projects and drafts

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::membership::Parent,
};

/// Mutations of the association tables. Each call returns the number of
/// rows it inserted or deleted; re-adding an existing pair and removing an
/// absent one both succeed with 0.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn add_equipment(&self, parent: Parent, equipment_id: i32) -> AppResult<u64>;

    async fn remove_equipment(&self, parent: Parent, equipment_id: i32) -> AppResult<u64>;

    /// Every item currently in the set
    async fn add_set(&self, parent: Parent, equipment_set_id: i32) -> AppResult<u64>;

    async fn remove_set(&self, parent: Parent, equipment_set_id: i32) -> AppResult<u64>;

    async fn reset(&self, parent: Parent) -> AppResult<u64>;

    async fn copy_draft_to_project(&self, project_id: i32, draft_id: i32) -> AppResult<u64>;
}

#[derive(Clone)]
pub struct MembershipsRepository {
    pool: Pool<Postgres>,
}

impl MembershipsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// An insert referencing a missing parent or item
fn map_insert_error(parent: Parent, err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_foreign_key_violation() {
            return AppError::NotFound(format!("{} or referenced equipment not found", parent));
        }
    }
    AppError::Database(err)
}

#[async_trait]
impl MembershipStore for MembershipsRepository {
    async fn add_equipment(&self, parent: Parent, equipment_id: i32) -> AppResult<u64> {
        let query = format!(
            "INSERT INTO {} ({}, equipment_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
            parent.table(),
            parent.column()
        );

        let result = sqlx::query(&query)
            .bind(parent.id())
            .bind(equipment_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(parent, e))?;
        Ok(result.rows_affected())
    }

    async fn remove_equipment(&self, parent: Parent, equipment_id: i32) -> AppResult<u64> {
        let query = format!(
            "DELETE FROM {} WHERE {} = $1 AND equipment_id = $2",
            parent.table(),
            parent.column()
        );

        let result = sqlx::query(&query)
            .bind(parent.id())
            .bind(equipment_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn add_set(&self, parent: Parent, equipment_set_id: i32) -> AppResult<u64> {
        let query = format!(
            r#"
            INSERT INTO {} ({}, equipment_id)
            SELECT $1, e.equipment_id
            FROM equipment e
            WHERE e.equipment_set_id = $2
            ON CONFLICT DO NOTHING
            "#,
            parent.table(),
            parent.column()
        );

        let result = sqlx::query(&query)
            .bind(parent.id())
            .bind(equipment_set_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(parent, e))?;
        Ok(result.rows_affected())
    }

    async fn remove_set(&self, parent: Parent, equipment_set_id: i32) -> AppResult<u64> {
        let query = format!(
            r#"
            DELETE FROM {table} assoc
            USING equipment e
            WHERE assoc.{column} = $1
              AND assoc.equipment_id = e.equipment_id
              AND e.equipment_set_id = $2
            "#,
            table = parent.table(),
            column = parent.column()
        );

        let result = sqlx::query(&query)
            .bind(parent.id())
            .bind(equipment_set_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn reset(&self, parent: Parent) -> AppResult<u64> {
        let query = format!("DELETE FROM {} WHERE {} = $1", parent.table(), parent.column());

        let result = sqlx::query(&query)
            .bind(parent.id())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn copy_draft_to_project(&self, project_id: i32, draft_id: i32) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO equipment_in_project (project_id, equipment_id)
            SELECT $1, eid.equipment_id
            FROM equipment_in_draft eid
            WHERE eid.draft_id = $2
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(project_id)
        .bind(draft_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(Parent::Project(project_id), e))?;
        Ok(result.rows_affected())
    }
}
