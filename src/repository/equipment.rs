//! Equipment repository and the joined catalog read views

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres, QueryBuilder};

use super::equipment_sets::{EquipmentSetFilter, EquipmentSetsRepository};
use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, EquipmentPayload, EquipmentRow},
        equipment_set::EquipmentSet,
        membership::Parent,
        project::ProjectSummary,
    },
};

const SELECT_EQUIPMENT: &str = r#"
    SELECT
        e.equipment_id,
        e.equipment_set_id,
        e.equipment_name,
        e.description,
        e.serial_number,
        e.storage_id,
        e.current_storage,
        e.needs_maintenance,
        e.date_of_purchase,
        e.cost_of_purchase,
        es.equipment_set_name,
        es.description AS set_description,
        es.set_type_id,
        st.set_type_name,
        w.warehouse_name,
        w.warehouse_adress
    FROM equipment e
    JOIN equipment_sets es ON es.equipment_set_id = e.equipment_set_id
    JOIN set_types st ON st.set_type_id = es.set_type_id
    JOIN warehouses w ON w.warehouse_id = e.storage_id
"#;

/// Conjunctive filters for equipment listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentFilter {
    Id(i32),
    InSet(i32),
    AssignedTo(Parent),
    NotAssignedTo(Parent),
}

/// Joined read views over equipment and equipment sets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Ordered by name then id, each item carrying its project assignments
    async fn list_equipment(&self, filters: &[EquipmentFilter]) -> AppResult<Vec<Equipment>>;

    /// Ordered by name then id
    async fn list_equipment_sets(&self, filters: &[EquipmentSetFilter]) -> AppResult<Vec<EquipmentSet>>;
}

#[derive(Debug, FromRow)]
struct EquipmentProjectRow {
    equipment_id: i32,
    project_id: i32,
    project_name: String,
}

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
    sets: EquipmentSetsRepository,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            sets: EquipmentSetsRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(
        &self,
        equipment_set_id: i32,
        storage_id: i32,
        data: &EquipmentPayload,
    ) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO equipment (
                equipment_set_id, equipment_name, description, serial_number, storage_id,
                current_storage, needs_maintenance, date_of_purchase, cost_of_purchase
            )
            VALUES ($1, $2, NULLIF($3, ''), $4, $5, NULLIF($6, ''), $7, $8, $9)
            RETURNING equipment_id
            "#,
        )
        .bind(equipment_set_id)
        .bind(&data.equipment_name)
        .bind(&data.description)
        .bind(&data.serial_number)
        .bind(storage_id)
        .bind(&data.current_storage)
        .bind(data.needs_maintenance)
        .bind(data.date_of_purchase)
        .bind(data.cost_of_purchase)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    pub async fn update(
        &self,
        id: i32,
        equipment_set_id: i32,
        storage_id: i32,
        data: &EquipmentPayload,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE equipment
            SET equipment_set_id = $1,
                equipment_name = $2,
                description = NULLIF($3, ''),
                serial_number = $4,
                storage_id = $5,
                current_storage = NULLIF($6, ''),
                needs_maintenance = $7,
                date_of_purchase = $8,
                cost_of_purchase = $9
            WHERE equipment_id = $10
            "#,
        )
        .bind(equipment_set_id)
        .bind(&data.equipment_name)
        .bind(&data.description)
        .bind(&data.serial_number)
        .bind(storage_id)
        .bind(&data.current_storage)
        .bind(data.needs_maintenance)
        .bind(data.date_of_purchase)
        .bind(data.cost_of_purchase)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Association rows go with the item
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE equipment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Project summaries for the given items, one query for all of them
    async fn project_summaries(&self, ids: &[i32]) -> AppResult<HashMap<i32, Vec<ProjectSummary>>> {
        let rows = sqlx::query_as::<_, EquipmentProjectRow>(
            r#"
            SELECT eip.equipment_id, p.project_id, p.project_name
            FROM equipment_in_project eip
            JOIN projects p ON p.project_id = eip.project_id
            WHERE eip.equipment_id = ANY($1)
            ORDER BY p.project_id ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_equipment: HashMap<i32, Vec<ProjectSummary>> = HashMap::new();
        for row in rows {
            by_equipment
                .entry(row.equipment_id)
                .or_default()
                .push(ProjectSummary {
                    project_id: row.project_id,
                    project_name: row.project_name,
                });
        }
        Ok(by_equipment)
    }
}

fn push_equipment_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &EquipmentFilter) {
    match filter {
        EquipmentFilter::Id(id) => {
            builder.push("e.equipment_id = ").push_bind(*id);
        }
        EquipmentFilter::InSet(set_id) => {
            builder.push("e.equipment_set_id = ").push_bind(*set_id);
        }
        EquipmentFilter::AssignedTo(parent) | EquipmentFilter::NotAssignedTo(parent) => {
            let negate = matches!(filter, EquipmentFilter::NotAssignedTo(_));
            builder
                .push(if negate { "e.equipment_id NOT IN" } else { "e.equipment_id IN" })
                .push(format!(
                    " (SELECT equipment_id FROM {} WHERE {} = ",
                    parent.table(),
                    parent.column()
                ))
                .push_bind(parent.id())
                .push(")");
        }
    }
}

#[async_trait]
impl CatalogReader for EquipmentRepository {
    async fn list_equipment(&self, filters: &[EquipmentFilter]) -> AppResult<Vec<Equipment>> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_EQUIPMENT);

        for (idx, filter) in filters.iter().enumerate() {
            builder.push(if idx == 0 { " WHERE " } else { " AND " });
            push_equipment_filter(&mut builder, filter);
        }
        builder.push(" ORDER BY e.equipment_name ASC, e.equipment_id ASC");

        let rows = builder
            .build_query_as::<EquipmentRow>()
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|row| row.equipment_id).collect();
        let mut projects = self.project_summaries(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut equipment = Equipment::from(row);
                equipment.projects = projects.remove(&equipment.equipment_id).unwrap_or_default();
                equipment
            })
            .collect())
    }

    async fn list_equipment_sets(&self, filters: &[EquipmentSetFilter]) -> AppResult<Vec<EquipmentSet>> {
        self.sets.list(filters).await
    }
}
