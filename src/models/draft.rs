//! Draft equipment list model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::equipment::Equipment;

#[derive(Debug, Clone, FromRow)]
pub struct DraftRow {
    pub draft_id: i32,
    pub draft_name: String,
}

/// Named equipment list that can later be copied into a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Draft {
    pub draft_id: i32,
    pub draft_name: String,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl Draft {
    pub fn from_row(row: DraftRow, equipment: Vec<Equipment>) -> Self {
        Self {
            draft_id: row.draft_id,
            draft_name: row.draft_name,
            equipment,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DraftPayload {
    #[validate(length(min = 1, max = 255))]
    pub draft_name: String,
}
