//! Name to id resolution for catalog references carried in payloads

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Catalog tables that can be referenced by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    SetType,
    EquipmentSet,
    Warehouse,
    ProjectType,
    /// Matched against the user's full name
    User,
}

impl ReferenceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReferenceKind::SetType => "set type",
            ReferenceKind::EquipmentSet => "equipment set",
            ReferenceKind::Warehouse => "warehouse",
            ReferenceKind::ProjectType => "project type",
            ReferenceKind::User => "user",
        }
    }

    fn lookup_sql(&self) -> &'static str {
        match self {
            ReferenceKind::SetType => "SELECT set_type_id FROM set_types WHERE set_type_name = $1",
            ReferenceKind::EquipmentSet => {
                "SELECT equipment_set_id FROM equipment_sets WHERE equipment_set_name = $1"
            }
            ReferenceKind::Warehouse => "SELECT warehouse_id FROM warehouses WHERE warehouse_name = $1",
            ReferenceKind::ProjectType => {
                "SELECT project_type_id FROM project_types WHERE project_type_name = $1"
            }
            ReferenceKind::User => "SELECT id FROM users WHERE name = $1",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceResolver: Send + Sync {
    /// Exact, case-sensitive lookup. No match is `InvalidReference`.
    async fn resolve(&self, kind: ReferenceKind, name: &str) -> AppResult<i32>;
}

#[derive(Clone)]
pub struct ReferencesRepository {
    pool: Pool<Postgres>,
}

impl ReferencesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferenceResolver for ReferencesRepository {
    async fn resolve(&self, kind: ReferenceKind, name: &str) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(kind.lookup_sql())
            .bind(name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::InvalidReference(format!("Unknown {} '{}'", kind.label(), name)))
    }
}
