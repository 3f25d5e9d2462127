//! Warehouses repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::warehouse::{Warehouse, WarehousePayload},
};

#[derive(Clone)]
pub struct WarehousesRepository {
    pool: Pool<Postgres>,
}

impl WarehousesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Warehouse>> {
        let rows = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT warehouse_id, warehouse_name, warehouse_adress
            FROM warehouses
            ORDER BY warehouse_name ASC, warehouse_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &WarehousePayload) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO warehouses (warehouse_name, warehouse_adress)
            VALUES ($1, NULLIF($2, ''))
            RETURNING warehouse_id
            "#,
        )
        .bind(&data.warehouse_name)
        .bind(&data.warehouse_adress)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    pub async fn update(&self, id: i32, data: &WarehousePayload) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE warehouses
            SET warehouse_name = $1, warehouse_adress = NULLIF($2, '')
            WHERE warehouse_id = $3
            "#,
        )
        .bind(&data.warehouse_name)
        .bind(&data.warehouse_adress)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Warehouse {} not found", id)));
        }
        Ok(())
    }

    /// Fails with `Conflict` while equipment is still stored there
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM warehouses WHERE warehouse_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Warehouse {} not found", id)));
        }
        Ok(())
    }
}
