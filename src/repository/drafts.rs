//! Drafts repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::equipment::{CatalogReader, EquipmentFilter, EquipmentRepository};
use crate::{
    error::{AppError, AppResult},
    models::{
        draft::{Draft, DraftPayload, DraftRow},
        membership::Parent,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DraftReader: Send + Sync {
    /// Every draft with its equipment, ordered by name descending
    async fn list_drafts(&self) -> AppResult<Vec<Draft>>;

    async fn get_draft(&self, id: i32) -> AppResult<Draft>;
}

#[derive(Clone)]
pub struct DraftsRepository {
    pool: Pool<Postgres>,
    equipment: EquipmentRepository,
}

impl DraftsRepository {
    pub fn new(pool: Pool<Postgres>, equipment: EquipmentRepository) -> Self {
        Self { pool, equipment }
    }

    async fn with_equipment(&self, row: DraftRow) -> AppResult<Draft> {
        let equipment = self
            .equipment
            .list_equipment(&[EquipmentFilter::AssignedTo(Parent::Draft(row.draft_id))])
            .await?;
        Ok(Draft::from_row(row, equipment))
    }

    pub async fn create(&self, data: &DraftPayload) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>("INSERT INTO drafts (draft_name) VALUES ($1) RETURNING draft_id")
            .bind(&data.draft_name)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from_write)
    }

    pub async fn update(&self, id: i32, data: &DraftPayload) -> AppResult<()> {
        let result = sqlx::query("UPDATE drafts SET draft_name = $1 WHERE draft_id = $2")
            .bind(&data.draft_name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Draft {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM drafts WHERE draft_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Draft {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl DraftReader for DraftsRepository {
    async fn list_drafts(&self) -> AppResult<Vec<Draft>> {
        let rows = sqlx::query_as::<_, DraftRow>(
            "SELECT draft_id, draft_name FROM drafts ORDER BY draft_name DESC, draft_id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut drafts = Vec::with_capacity(rows.len());
        for row in rows {
            drafts.push(self.with_equipment(row).await?);
        }
        Ok(drafts)
    }

    async fn get_draft(&self, id: i32) -> AppResult<Draft> {
        let row = sqlx::query_as::<_, DraftRow>("SELECT draft_id, draft_name FROM drafts WHERE draft_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Draft {} not found", id)))?;

        self.with_equipment(row).await
    }
}
