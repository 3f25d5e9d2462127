//! Project type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProjectType {
    pub project_type_id: i32,
    pub project_type_name: String,
    /// Identifier of the type in the external CRM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neaktor_id: Option<String>,
}

impl ProjectType {
    /// Stand-in for a project whose type is unset
    pub fn placeholder() -> Self {
        Self {
            project_type_id: 0,
            project_type_name: String::new(),
            neaktor_id: None,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProjectTypePayload {
    #[validate(length(min = 1, max = 255))]
    pub project_type_name: String,
    pub neaktor_id: Option<String>,
}
