//! Draft equipment lists service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        draft::{Draft, DraftPayload},
        pagination::{matches_search, ListQuery, PaginatedResponse},
    },
    repository::{drafts::DraftReader, Repository},
};

/// A draft matches on its own id or name, or on the name or serial of any
/// item it contains
fn draft_matches(term: &str, draft: &Draft) -> bool {
    matches_search(term, &[draft.draft_id.to_string(), draft.draft_name.clone()])
        || draft
            .equipment
            .iter()
            .any(|item| matches_search(term, &[&item.equipment_name, &item.serial_number]))
}

#[derive(Clone)]
pub struct DraftsService {
    repository: Repository,
    drafts: Arc<dyn DraftReader>,
}

impl DraftsService {
    pub fn new(repository: Repository, drafts: Arc<dyn DraftReader>) -> Self {
        Self { repository, drafts }
    }

    pub async fn search_drafts(&self, query: &ListQuery) -> AppResult<PaginatedResponse<Draft>> {
        let drafts = self.drafts.list_drafts().await?;
        Ok(PaginatedResponse::search(drafts, query, draft_matches))
    }

    pub async fn get_draft(&self, id: i32) -> AppResult<Draft> {
        self.drafts.get_draft(id).await
    }

    pub async fn create_draft(&self, data: &DraftPayload) -> AppResult<Vec<Draft>> {
        let id = self.repository.drafts.create(data).await?;
        tracing::info!(draft_id = id, "Draft created");
        self.drafts.list_drafts().await
    }

    pub async fn update_draft(&self, id: i32, data: &DraftPayload) -> AppResult<Vec<Draft>> {
        self.repository.drafts.update(id, data).await?;
        self.drafts.list_drafts().await
    }

    pub async fn delete_draft(&self, id: i32) -> AppResult<Vec<Draft>> {
        self.repository.drafts.delete(id).await?;
        tracing::info!(draft_id = id, "Draft deleted");
        self.drafts.list_drafts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        equipment::Equipment, equipment_set::EquipmentSet, set_type::SetType, warehouse::Warehouse,
    };

    fn camera(serial: &str) -> Equipment {
        Equipment {
            equipment_id: 9,
            equipment_set_id: 2,
            equipment_name: "Alexa Mini".to_string(),
            description: None,
            serial_number: serial.to_string(),
            storage_id: 1,
            current_storage: None,
            needs_maintenance: false,
            date_of_purchase: None,
            cost_of_purchase: None,
            equipment_set: EquipmentSet {
                equipment_set_id: 2,
                equipment_set_name: "Camera Kit".to_string(),
                description: None,
                set_type_id: 1,
                set_type: SetType {
                    set_type_id: 1,
                    set_type_name: "Camera".to_string(),
                },
            },
            storage: Warehouse {
                warehouse_id: 1,
                warehouse_name: "Main".to_string(),
                warehouse_adress: None,
            },
            projects: Vec::new(),
        }
    }

    fn draft(name: &str) -> Draft {
        Draft {
            draft_id: 4,
            draft_name: name.to_string(),
            equipment: Vec::new(),
        }
    }

    #[test]
    fn test_draft_matches_own_fields() {
        assert!(draft_matches("night", &draft("Night exterior")));
        assert!(draft_matches("4", &draft("Night exterior")));
        assert!(!draft_matches("studio", &draft("Night exterior")));
    }

    #[test]
    fn test_draft_matches_contained_items() {
        let mut with_camera = draft("Alpha");
        with_camera.equipment.push(camera("C-001"));

        assert!(draft_matches("c-001", &with_camera));
        assert!(draft_matches("alexa", &with_camera));
        assert!(!draft_matches("c-001", &draft("Zulu")));
    }
}
