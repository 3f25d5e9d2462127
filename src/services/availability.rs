//! Assigned / available reconciliation for projects and drafts
//!
//! Every call recomputes the partition from storage. Mutations are not
//! wrapped in a transaction with the recomputation that follows them, so a
//! concurrent writer can show up in a mutator's response.

use std::{collections::HashSet, sync::Arc};

use crate::{
    error::AppResult,
    models::{
        equipment::Equipment,
        equipment_set::EquipmentSet,
        membership::{Availability, Parent, ParentView},
    },
    repository::{
        drafts::DraftReader,
        equipment::{CatalogReader, EquipmentFilter},
        equipment_sets::EquipmentSetFilter,
        memberships::MembershipStore,
        projects::ProjectReader,
        references::{ReferenceKind, ReferenceResolver},
    },
};

/// Distinct set ids of `items`, in first-encountered order
pub fn distinct_set_ids(items: &[Equipment]) -> Vec<i32> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| item.equipment_set_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Reorder `sets` to follow `ids`; ids without a set are skipped
fn order_sets(mut sets: Vec<EquipmentSet>, ids: &[i32]) -> Vec<EquipmentSet> {
    let mut ordered = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(pos) = sets.iter().position(|set| set.equipment_set_id == *id) {
            ordered.push(sets.swap_remove(pos));
        }
    }
    ordered
}

#[derive(Clone)]
pub struct AvailabilityService {
    catalog: Arc<dyn CatalogReader>,
    projects: Arc<dyn ProjectReader>,
    drafts: Arc<dyn DraftReader>,
    memberships: Arc<dyn MembershipStore>,
    references: Arc<dyn ReferenceResolver>,
}

impl AvailabilityService {
    pub fn new(
        catalog: Arc<dyn CatalogReader>,
        projects: Arc<dyn ProjectReader>,
        drafts: Arc<dyn DraftReader>,
        memberships: Arc<dyn MembershipStore>,
        references: Arc<dyn ReferenceResolver>,
    ) -> Self {
        Self {
            catalog,
            projects,
            drafts,
            memberships,
            references,
        }
    }

    async fn load_parent(&self, parent: Parent) -> AppResult<ParentView> {
        match parent {
            Parent::Project(id) => Ok(ParentView::Project(self.projects.find_project(id).await?)),
            Parent::Draft(id) => Ok(ParentView::Draft(self.drafts.get_draft(id).await?)),
        }
    }

    /// Partition all equipment into assigned and available for `parent`
    pub async fn compute(&self, parent: Parent) -> AppResult<Availability> {
        let view = self.load_parent(parent).await?;

        let assigned = self
            .catalog
            .list_equipment(&[EquipmentFilter::AssignedTo(parent)])
            .await?;
        let available = self
            .catalog
            .list_equipment(&[EquipmentFilter::NotAssignedTo(parent)])
            .await?;

        let set_ids = distinct_set_ids(&available);
        let sets = if set_ids.is_empty() {
            Vec::new()
        } else {
            let found = self
                .catalog
                .list_equipment_sets(&[EquipmentSetFilter::Ids(set_ids.clone())])
                .await?;
            order_sets(found, &set_ids)
        };

        tracing::debug!(
            %parent,
            assigned = assigned.len(),
            available = available.len(),
            sets = sets.len(),
            "Availability computed"
        );

        Ok(Availability {
            parent: view,
            assigned,
            available,
            sets,
        })
    }

    pub async fn add_equipment(&self, parent: Parent, equipment_id: i32) -> AppResult<Availability> {
        let inserted = self.memberships.add_equipment(parent, equipment_id).await?;
        tracing::info!(%parent, equipment_id, inserted, "Equipment added");
        self.compute(parent).await
    }

    pub async fn remove_equipment(&self, parent: Parent, equipment_id: i32) -> AppResult<Availability> {
        let removed = self.memberships.remove_equipment(parent, equipment_id).await?;
        tracing::info!(%parent, equipment_id, removed, "Equipment removed");
        self.compute(parent).await
    }

    pub async fn add_set(&self, parent: Parent, equipment_set_id: i32) -> AppResult<Availability> {
        let inserted = self.memberships.add_set(parent, equipment_set_id).await?;
        tracing::info!(%parent, equipment_set_id, inserted, "Equipment set added");
        self.compute(parent).await
    }

    /// The set is named, so an unknown name fails before anything is deleted
    pub async fn remove_set(&self, parent: Parent, equipment_set_name: &str) -> AppResult<Availability> {
        let set_id = self
            .references
            .resolve(ReferenceKind::EquipmentSet, equipment_set_name)
            .await?;
        let removed = self.memberships.remove_set(parent, set_id).await?;
        tracing::info!(%parent, equipment_set_id = set_id, removed, "Equipment set removed");
        self.compute(parent).await
    }

    pub async fn reset_project(&self, project_id: i32) -> AppResult<Availability> {
        let parent = Parent::Project(project_id);
        let removed = self.memberships.reset(parent).await?;
        tracing::info!(%parent, removed, "Project equipment reset");
        self.compute(parent).await
    }

    pub async fn add_draft_to_project(&self, project_id: i32, draft_id: i32) -> AppResult<Availability> {
        let inserted = self.memberships.copy_draft_to_project(project_id, draft_id).await?;
        tracing::info!(project_id, draft_id, inserted, "Draft copied into project");
        self.compute(Parent::Project(project_id)).await
    }

    /// Items of the set not yet assigned to `parent`
    pub async fn available_in_set(&self, parent: Parent, equipment_set_id: i32) -> AppResult<Vec<Equipment>> {
        self.catalog
            .list_equipment(&[
                EquipmentFilter::InSet(equipment_set_id),
                EquipmentFilter::NotAssignedTo(parent),
            ])
            .await
    }
}
