//! Equipment membership in projects and drafts

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

use super::{draft::Draft, equipment::Equipment, equipment_set::EquipmentSet, project::Project};

/// Owner of an equipment association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    Project(i32),
    Draft(i32),
}

impl Parent {
    pub fn id(&self) -> i32 {
        match self {
            Parent::Project(id) | Parent::Draft(id) => *id,
        }
    }

    /// Association table
    pub fn table(&self) -> &'static str {
        match self {
            Parent::Project(_) => "equipment_in_project",
            Parent::Draft(_) => "equipment_in_draft",
        }
    }

    /// Owner column of the association table
    pub fn column(&self) -> &'static str {
        match self {
            Parent::Project(_) => "project_id",
            Parent::Draft(_) => "draft_id",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Parent::Project(_) => "project",
            Parent::Draft(_) => "draft",
        }
    }
}

impl std::fmt::Display for Parent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// Parent view loaded by the availability computation
#[derive(Debug, Clone, PartialEq)]
pub enum ParentView {
    Project(Project),
    Draft(Draft),
}

/// Assigned / available partition of all equipment for one parent
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub parent: ParentView,
    pub assigned: Vec<Equipment>,
    pub available: Vec<Equipment>,
    /// Sets represented among `available`, in first-encountered order
    pub sets: Vec<EquipmentSet>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EquipmentInProjectResponse {
    pub project: Project,
    pub equipment_in_project: Vec<Equipment>,
    pub available_equipment: Vec<Equipment>,
    pub sets_in_project: Vec<EquipmentSet>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EquipmentInDraftResponse {
    pub draft: Draft,
    pub equipment_in_draft: Vec<Equipment>,
    pub available_equipment: Vec<Equipment>,
    pub sets_in_draft: Vec<EquipmentSet>,
}

impl TryFrom<Availability> for EquipmentInProjectResponse {
    type Error = AppError;

    fn try_from(availability: Availability) -> Result<Self, Self::Error> {
        match availability.parent {
            ParentView::Project(project) => Ok(EquipmentInProjectResponse {
                project,
                equipment_in_project: availability.assigned,
                available_equipment: availability.available,
                sets_in_project: availability.sets,
            }),
            ParentView::Draft(draft) => Err(AppError::Internal(format!(
                "draft {} availability requested as a project",
                draft.draft_id
            ))),
        }
    }
}

impl TryFrom<Availability> for EquipmentInDraftResponse {
    type Error = AppError;

    fn try_from(availability: Availability) -> Result<Self, Self::Error> {
        match availability.parent {
            ParentView::Draft(draft) => Ok(EquipmentInDraftResponse {
                draft,
                equipment_in_draft: availability.assigned,
                available_equipment: availability.available,
                sets_in_draft: availability.sets,
            }),
            ParentView::Project(project) => Err(AppError::Internal(format!(
                "project {} availability requested as a draft",
                project.project_id
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EquipmentInProjectPayload {
    #[validate(range(min = 1))]
    pub project_id: i32,
    #[validate(range(min = 1))]
    pub equipment_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProjectSetPayload {
    #[validate(range(min = 1))]
    pub project_id: i32,
    #[validate(range(min = 1))]
    pub equipment_set_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProjectSetDeletePayload {
    #[validate(range(min = 1))]
    pub project_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub equipment_set_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddDraftToProjectPayload {
    #[validate(range(min = 1))]
    pub project_id: i32,
    #[validate(range(min = 1))]
    pub draft_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EquipmentInDraftPayload {
    #[validate(range(min = 1))]
    pub draft_id: i32,
    #[validate(range(min = 1))]
    pub equipment_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DraftSetPayload {
    #[validate(range(min = 1))]
    pub draft_id: i32,
    #[validate(range(min = 1))]
    pub equipment_set_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DraftSetDeletePayload {
    #[validate(range(min = 1))]
    pub draft_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub equipment_set_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_tables() {
        assert_eq!(Parent::Project(4).table(), "equipment_in_project");
        assert_eq!(Parent::Project(4).column(), "project_id");
        assert_eq!(Parent::Draft(9).table(), "equipment_in_draft");
        assert_eq!(Parent::Draft(9).column(), "draft_id");
        assert_eq!(Parent::Draft(9).to_string(), "draft 9");
    }

    #[test]
    fn test_payload_ids_must_be_positive() {
        let payload = EquipmentInProjectPayload {
            project_id: 0,
            equipment_id: 3,
        };
        assert!(payload.validate().is_err());

        let payload = DraftSetDeletePayload {
            draft_id: 1,
            equipment_set_name: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
