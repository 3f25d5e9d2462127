//! Business logic services

pub mod availability;
pub mod catalog;
pub mod conflicts;
pub mod drafts;
pub mod equipment;
pub mod projects;
pub mod users;

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    repository::{
        conflicts::ConflictStore, drafts::DraftReader, equipment::CatalogReader, memberships::MembershipStore,
        projects::ProjectReader, references::ReferenceResolver, Repository,
    },
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub equipment: equipment::EquipmentService,
    pub projects: projects::ProjectsService,
    pub drafts: drafts::DraftsService,
    pub availability: availability::AvailabilityService,
    pub conflicts: conflicts::ConflictService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        let references: Arc<dyn ReferenceResolver> = Arc::new(repository.references.clone());
        let catalog: Arc<dyn CatalogReader> = Arc::new(repository.equipment.clone());
        let projects: Arc<dyn ProjectReader> = Arc::new(repository.projects.clone());
        let drafts: Arc<dyn DraftReader> = Arc::new(repository.drafts.clone());
        let memberships: Arc<dyn MembershipStore> = Arc::new(repository.memberships.clone());
        let conflicts: Arc<dyn ConflictStore> = Arc::new(repository.conflicts.clone());

        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone(), references.clone(), catalog.clone()),
            projects: projects::ProjectsService::new(repository.clone(), references.clone(), projects.clone()),
            drafts: drafts::DraftsService::new(repository.clone(), drafts.clone()),
            availability: availability::AvailabilityService::new(
                catalog,
                projects.clone(),
                drafts,
                memberships,
                references,
            ),
            conflicts: conflicts::ConflictService::new(projects, conflicts),
            users: users::UsersService::new(repository, auth_config),
        }
    }
}
