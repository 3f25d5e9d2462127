//! Equipment sets repository

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::equipment_set::{EquipmentSet, EquipmentSetPayload, EquipmentSetRow, EquipmentSetStorageSummary},
};

const SELECT_EQUIPMENT_SET: &str = r#"
    SELECT
        es.equipment_set_id,
        es.equipment_set_name,
        es.description,
        es.set_type_id,
        st.set_type_name
    FROM equipment_sets es
    JOIN set_types st ON st.set_type_id = es.set_type_id
"#;

/// Conjunctive filters for equipment set listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipmentSetFilter {
    Id(i32),
    Ids(Vec<i32>),
    /// Sets holding at least one item flagged for maintenance
    NeedsMaintenance,
}

#[derive(Clone)]
pub struct EquipmentSetsRepository {
    pool: Pool<Postgres>,
}

impl EquipmentSetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Sets matching every filter, ordered by name then id
    pub async fn list(&self, filters: &[EquipmentSetFilter]) -> AppResult<Vec<EquipmentSet>> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_EQUIPMENT_SET);

        for (idx, filter) in filters.iter().enumerate() {
            builder.push(if idx == 0 { " WHERE " } else { " AND " });
            match filter {
                EquipmentSetFilter::Id(id) => {
                    builder.push("es.equipment_set_id = ").push_bind(*id);
                }
                EquipmentSetFilter::Ids(ids) => {
                    builder
                        .push("es.equipment_set_id = ANY(")
                        .push_bind(ids.clone())
                        .push(")");
                }
                EquipmentSetFilter::NeedsMaintenance => {
                    builder.push(
                        "EXISTS (SELECT 1 FROM equipment e \
                         WHERE e.equipment_set_id = es.equipment_set_id AND e.needs_maintenance = TRUE)",
                    );
                }
            }
        }

        builder.push(" ORDER BY es.equipment_set_name ASC, es.equipment_set_id ASC");

        let rows = builder
            .build_query_as::<EquipmentSetRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(EquipmentSet::from).collect())
    }

    pub async fn create(&self, set_type_id: i32, data: &EquipmentSetPayload) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO equipment_sets (equipment_set_name, description, set_type_id)
            VALUES ($1, NULLIF($2, ''), $3)
            RETURNING equipment_set_id
            "#,
        )
        .bind(&data.equipment_set_name)
        .bind(&data.description)
        .bind(set_type_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    pub async fn update(&self, id: i32, set_type_id: i32, data: &EquipmentSetPayload) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE equipment_sets
            SET equipment_set_name = $1, description = NULLIF($2, ''), set_type_id = $3
            WHERE equipment_set_id = $4
            "#,
        )
        .bind(&data.equipment_set_name)
        .bind(&data.description)
        .bind(set_type_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment set {} not found", id)));
        }
        Ok(())
    }

    /// Fails with `Conflict` while the set still holds equipment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_sets WHERE equipment_set_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment set {} not found", id)));
        }
        Ok(())
    }

    /// Item counts per (set, warehouse)
    pub async fn storage_summary(&self) -> AppResult<Vec<EquipmentSetStorageSummary>> {
        let rows = sqlx::query_as::<_, EquipmentSetStorageSummary>(
            r#"
            SELECT
                es.equipment_set_name,
                w.warehouse_name,
                COUNT(e.equipment_id)::INT AS equipment_count
            FROM equipment_sets es
            JOIN equipment e ON e.equipment_set_id = es.equipment_set_id
            JOIN warehouses w ON w.warehouse_id = e.storage_id
            GROUP BY es.equipment_set_name, w.warehouse_name
            ORDER BY es.equipment_set_name, w.warehouse_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
