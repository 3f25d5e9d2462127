//! Scheduling conflict records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// One equipment item double-booked with one other project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentConflict {
    pub equipment_id: i32,
    pub equipment_name: String,
    pub equipment_set_name: String,
    /// The other project
    pub project_id: i32,
    pub project_name: String,
}

/// Project sharing equipment with at least one overlapping project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ConflictingProject {
    pub project_id: i32,
    pub project_name: String,
    pub shooting_start_date: NaiveDate,
    pub shooting_end_date: NaiveDate,
    /// Distinct equipment items shared with overlapping projects
    pub conflicting_equipment_count: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConflictingEquipmentPayload {
    #[validate(range(min = 1))]
    pub project_id: i32,
}
