//! Repository layer for database operations

pub mod conflicts;
pub mod drafts;
pub mod equipment;
pub mod equipment_sets;
pub mod memberships;
pub mod project_types;
pub mod projects;
pub mod references;
pub mod set_types;
pub mod users;
pub mod warehouses;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub references: references::ReferencesRepository,
    pub set_types: set_types::SetTypesRepository,
    pub project_types: project_types::ProjectTypesRepository,
    pub warehouses: warehouses::WarehousesRepository,
    pub equipment_sets: equipment_sets::EquipmentSetsRepository,
    pub equipment: equipment::EquipmentRepository,
    pub projects: projects::ProjectsRepository,
    pub drafts: drafts::DraftsRepository,
    pub memberships: memberships::MembershipsRepository,
    pub conflicts: conflicts::ConflictsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        let equipment = equipment::EquipmentRepository::new(pool.clone());

        Self {
            references: references::ReferencesRepository::new(pool.clone()),
            set_types: set_types::SetTypesRepository::new(pool.clone()),
            project_types: project_types::ProjectTypesRepository::new(pool.clone()),
            warehouses: warehouses::WarehousesRepository::new(pool.clone()),
            equipment_sets: equipment_sets::EquipmentSetsRepository::new(pool.clone()),
            projects: projects::ProjectsRepository::new(pool.clone(), equipment.clone()),
            drafts: drafts::DraftsRepository::new(pool.clone(), equipment.clone()),
            memberships: memberships::MembershipsRepository::new(pool.clone()),
            conflicts: conflicts::ConflictsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            equipment,
            pool,
        }
    }

    /// Round-trip to the database, used by the readiness check
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
