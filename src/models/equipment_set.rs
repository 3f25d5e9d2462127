//! Equipment set model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::set_type::SetType;

/// Flat row of `equipment_sets JOIN set_types`
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentSetRow {
    pub equipment_set_id: i32,
    pub equipment_set_name: String,
    pub description: Option<String>,
    pub set_type_id: i32,
    pub set_type_name: String,
}

impl From<EquipmentSetRow> for EquipmentSet {
    fn from(row: EquipmentSetRow) -> Self {
        EquipmentSet {
            equipment_set_id: row.equipment_set_id,
            equipment_set_name: row.equipment_set_name,
            description: row.description,
            set_type_id: row.set_type_id,
            set_type: SetType {
                set_type_id: row.set_type_id,
                set_type_name: row.set_type_name,
            },
        }
    }
}

/// Equipment set with its resolved set type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentSet {
    pub equipment_set_id: i32,
    pub equipment_set_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub set_type_id: i32,
    #[serde(rename = "type")]
    pub set_type: SetType,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EquipmentSetPayload {
    #[validate(length(min = 1, max = 255))]
    pub equipment_set_name: String,
    pub description: Option<String>,
    /// Name of an existing set type
    #[validate(length(min = 1, max = 255))]
    pub set_type_name: String,
}

/// Number of items of a set stored in one warehouse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct EquipmentSetStorageSummary {
    pub equipment_set_name: String,
    pub warehouse_name: String,
    pub equipment_count: i32,
}
