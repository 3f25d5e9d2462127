//! Set type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Classification of equipment sets (e.g. "Lighting", "Camera")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SetType {
    pub set_type_id: i32,
    pub set_type_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetTypePayload {
    #[validate(length(min = 1, max = 255))]
    pub set_type_name: String,
}
