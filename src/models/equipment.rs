//! Equipment model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    equipment_set::EquipmentSet, project::ProjectSummary, set_type::SetType, warehouse::Warehouse,
};

/// Flat row of `equipment JOIN equipment_sets JOIN set_types JOIN warehouses`
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentRow {
    pub equipment_id: i32,
    pub equipment_set_id: i32,
    pub equipment_name: String,
    pub description: Option<String>,
    pub serial_number: String,
    pub storage_id: i32,
    pub current_storage: Option<String>,
    pub needs_maintenance: bool,
    pub date_of_purchase: Option<NaiveDate>,
    pub cost_of_purchase: Option<Decimal>,
    pub equipment_set_name: String,
    pub set_description: Option<String>,
    pub set_type_id: i32,
    pub set_type_name: String,
    pub warehouse_name: String,
    pub warehouse_adress: Option<String>,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Equipment {
            equipment_id: row.equipment_id,
            equipment_set_id: row.equipment_set_id,
            equipment_name: row.equipment_name,
            description: row.description,
            serial_number: row.serial_number,
            storage_id: row.storage_id,
            current_storage: row.current_storage,
            needs_maintenance: row.needs_maintenance,
            date_of_purchase: row.date_of_purchase,
            cost_of_purchase: row.cost_of_purchase,
            equipment_set: EquipmentSet {
                equipment_set_id: row.equipment_set_id,
                equipment_set_name: row.equipment_set_name,
                description: row.set_description,
                set_type_id: row.set_type_id,
                set_type: SetType {
                    set_type_id: row.set_type_id,
                    set_type_name: row.set_type_name,
                },
            },
            storage: Warehouse {
                warehouse_id: row.storage_id,
                warehouse_name: row.warehouse_name,
                warehouse_adress: row.warehouse_adress,
            },
            projects: Vec::new(),
        }
    }
}

/// Equipment item with its set, warehouse and current project assignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub equipment_id: i32,
    pub equipment_set_id: i32,
    pub equipment_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub serial_number: String,
    pub storage_id: i32,
    /// Free-text override of the storage location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_storage: Option<String>,
    pub needs_maintenance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_purchase: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    #[schema(value_type = Option<f64>)]
    pub cost_of_purchase: Option<Decimal>,
    pub equipment_set: EquipmentSet,
    pub storage: Warehouse,
    /// Projects this item is assigned to
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EquipmentPayload {
    #[validate(length(min = 1, max = 255))]
    pub equipment_name: String,
    #[validate(length(min = 1, max = 255))]
    pub serial_number: String,
    /// Name of an existing equipment set
    #[validate(length(min = 1, max = 255))]
    pub equipment_set_name: String,
    pub description: Option<String>,
    /// Name of an existing warehouse
    #[validate(length(min = 1, max = 255))]
    pub warehouse_name: String,
    #[serde(rename = "current_storage_name")]
    pub current_storage: Option<String>,
    #[serde(default)]
    pub needs_maintenance: bool,
    pub date_of_purchase: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub cost_of_purchase: Option<Decimal>,
}
