//! Double-booking queries over overlapping, non-archived projects
//!
//! Two inclusive ranges `[s1, e1]` and `[s2, e2]` overlap unless
//! `e2 < s1 OR s2 > e1`, so projects touching on one day conflict.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::conflict::{ConflictingProject, EquipmentConflict},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConflictStore: Send + Sync {
    /// Equipment of `project_id` also booked by another overlapping,
    /// non-archived project. The subject's own archived flag is ignored.
    async fn conflicting_equipment(&self, project_id: i32) -> AppResult<Vec<EquipmentConflict>>;

    /// Non-archived projects sharing equipment with an overlapping one
    async fn conflicting_projects(&self) -> AppResult<Vec<ConflictingProject>>;
}

#[derive(Clone)]
pub struct ConflictsRepository {
    pool: Pool<Postgres>,
}

impl ConflictsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConflictStore for ConflictsRepository {
    async fn conflicting_equipment(&self, project_id: i32) -> AppResult<Vec<EquipmentConflict>> {
        let rows = sqlx::query_as::<_, EquipmentConflict>(
            r#"
            SELECT DISTINCT
                e.equipment_id,
                e.equipment_name,
                es.equipment_set_name,
                p2.project_id,
                p2.project_name
            FROM projects p
            JOIN equipment_in_project eip1 ON eip1.project_id = p.project_id
            JOIN equipment_in_project eip2 ON eip2.equipment_id = eip1.equipment_id
            JOIN projects p2 ON p2.project_id = eip2.project_id
            JOIN equipment e ON e.equipment_id = eip1.equipment_id
            JOIN equipment_sets es ON es.equipment_set_id = e.equipment_set_id
            WHERE p.project_id = $1
              AND p2.project_id <> p.project_id
              AND p2.archived = FALSE
              AND NOT (p2.shooting_end_date < p.shooting_start_date
                       OR p2.shooting_start_date > p.shooting_end_date)
            ORDER BY e.equipment_name, p2.project_name, e.equipment_id, p2.project_id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn conflicting_projects(&self) -> AppResult<Vec<ConflictingProject>> {
        let rows = sqlx::query_as::<_, ConflictingProject>(
            r#"
            SELECT
                p.project_id,
                p.project_name,
                p.shooting_start_date,
                p.shooting_end_date,
                COUNT(DISTINCT eip1.equipment_id)::INT AS conflicting_equipment_count
            FROM projects p
            JOIN equipment_in_project eip1 ON eip1.project_id = p.project_id
            JOIN equipment_in_project eip2 ON eip2.equipment_id = eip1.equipment_id
            JOIN projects p2 ON p2.project_id = eip2.project_id
            WHERE p.archived = FALSE
              AND p2.project_id <> p.project_id
              AND p2.archived = FALSE
              AND NOT (p2.shooting_end_date < p.shooting_start_date
                       OR p2.shooting_start_date > p.shooting_end_date)
            GROUP BY p.project_id, p.project_name, p.shooting_start_date, p.shooting_end_date
            ORDER BY p.shooting_start_date ASC, p.project_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
