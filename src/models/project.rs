//! Project (production) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{equipment::Equipment, project_type::ProjectType, user::UserShort};

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Same predicate as the SQL in `repository::conflicts`. Touching
    /// endpoints count as an overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(other.end < self.start || other.start > self.end)
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Project reference attached to an equipment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProjectSummary {
    pub project_id: i32,
    pub project_name: String,
}

/// Flat row of `projects LEFT JOIN project_types LEFT JOIN users`
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub project_id: i32,
    pub neaktor_id: Option<String>,
    pub project_name: String,
    pub archived: bool,
    pub project_type_id: i32,
    pub shooting_start_date: NaiveDate,
    pub shooting_end_date: NaiveDate,
    pub chief_engineer_id: i32,
    pub project_type_name: String,
    pub project_type_neaktor_id: Option<String>,
    pub chief_engineer_name: String,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let project_type = if row.project_type_id == 0 {
            ProjectType::placeholder()
        } else {
            ProjectType {
                project_type_id: row.project_type_id,
                project_type_name: row.project_type_name,
                neaktor_id: row.project_type_neaktor_id,
            }
        };

        Project {
            project_id: row.project_id,
            neaktor_id: row.neaktor_id,
            project_name: row.project_name,
            archived: row.archived,
            project_type_id: row.project_type_id,
            shooting_start_date: row.shooting_start_date,
            shooting_end_date: row.shooting_end_date,
            chief_engineer_id: row.chief_engineer_id,
            project_type,
            chief_engineer: UserShort {
                id: row.chief_engineer_id,
                name: row.chief_engineer_name,
            },
            equipment_ids: Vec::new(),
        }
    }
}

/// Project with its type, chief engineer and assigned equipment ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub project_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neaktor_id: Option<String>,
    pub project_name: String,
    pub archived: bool,
    /// 0 when the project has no type
    pub project_type_id: i32,
    pub shooting_start_date: NaiveDate,
    pub shooting_end_date: NaiveDate,
    /// 0 when no chief engineer is assigned
    pub chief_engineer_id: i32,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub chief_engineer: UserShort,
    #[serde(default)]
    pub equipment_ids: Vec<i32>,
}

/// Single project with full equipment detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub equipment: Vec<Equipment>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProjectPayload {
    #[validate(length(min = 1, max = 255))]
    pub project_name: String,
    /// Name of an existing project type
    #[validate(length(min = 1, max = 255))]
    pub project_type_name: String,
    #[serde(default)]
    pub archived: bool,
    /// Full name of an existing user
    #[validate(length(min = 1, max = 255))]
    pub chief_engineer_name: String,
    pub shooting_start_date: NaiveDate,
    pub shooting_end_date: NaiveDate,
    pub neaktor_id: Option<String>,
}

impl ProjectPayload {
    pub fn schedule(&self) -> DateRange {
        DateRange::new(self.shooting_start_date, self.shooting_end_date)
    }
}
