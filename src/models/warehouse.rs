//! Warehouse model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Warehouse {
    pub warehouse_id: i32,
    pub warehouse_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse_adress: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WarehousePayload {
    #[validate(length(min = 1, max = 255))]
    pub warehouse_name: String,
    pub warehouse_adress: Option<String>,
}
