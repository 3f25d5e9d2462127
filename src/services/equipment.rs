//! Equipment and equipment set management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, EquipmentPayload},
        equipment_set::{EquipmentSet, EquipmentSetPayload, EquipmentSetStorageSummary},
        pagination::{matches_search, ListQuery, PaginatedResponse},
    },
    repository::{
        equipment::{CatalogReader, EquipmentFilter},
        equipment_sets::EquipmentSetFilter,
        references::{ReferenceKind, ReferenceResolver},
        Repository,
    },
};

fn equipment_matches(term: &str, item: &Equipment) -> bool {
    matches_search(
        term,
        &[
            item.equipment_id.to_string(),
            item.equipment_name.clone(),
            item.serial_number.clone(),
            item.description.clone().unwrap_or_default(),
            item.equipment_set.equipment_set_name.clone(),
            item.storage.warehouse_name.clone(),
        ],
    )
}

fn equipment_set_matches(term: &str, set: &EquipmentSet) -> bool {
    matches_search(
        term,
        &[
            set.equipment_set_id.to_string(),
            set.equipment_set_name.clone(),
            set.description.clone().unwrap_or_default(),
            set.set_type.set_type_name.clone(),
        ],
    )
}

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    references: Arc<dyn ReferenceResolver>,
    catalog: Arc<dyn CatalogReader>,
}

impl EquipmentService {
    pub fn new(
        repository: Repository,
        references: Arc<dyn ReferenceResolver>,
        catalog: Arc<dyn CatalogReader>,
    ) -> Self {
        Self {
            repository,
            references,
            catalog,
        }
    }

    // Equipment sets

    pub async fn list_equipment_sets(&self) -> AppResult<Vec<EquipmentSet>> {
        self.catalog.list_equipment_sets(&[]).await
    }

    pub async fn search_equipment_sets(&self, query: &ListQuery) -> AppResult<PaginatedResponse<EquipmentSet>> {
        let sets = self.list_equipment_sets().await?;
        Ok(PaginatedResponse::search(sets, query, equipment_set_matches))
    }

    pub async fn get_equipment_set(&self, id: i32) -> AppResult<EquipmentSet> {
        self.catalog
            .list_equipment_sets(&[EquipmentSetFilter::Id(id)])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Equipment set {} not found", id)))
    }

    pub async fn create_equipment_set(&self, data: &EquipmentSetPayload) -> AppResult<Vec<EquipmentSet>> {
        let set_type_id = self
            .references
            .resolve(ReferenceKind::SetType, &data.set_type_name)
            .await?;
        let id = self.repository.equipment_sets.create(set_type_id, data).await?;
        tracing::info!(equipment_set_id = id, "Equipment set created");
        self.list_equipment_sets().await
    }

    pub async fn update_equipment_set(&self, id: i32, data: &EquipmentSetPayload) -> AppResult<Vec<EquipmentSet>> {
        let set_type_id = self
            .references
            .resolve(ReferenceKind::SetType, &data.set_type_name)
            .await?;
        self.repository.equipment_sets.update(id, set_type_id, data).await?;
        self.list_equipment_sets().await
    }

    pub async fn delete_equipment_set(&self, id: i32) -> AppResult<Vec<EquipmentSet>> {
        self.repository.equipment_sets.delete(id).await?;
        tracing::info!(equipment_set_id = id, "Equipment set deleted");
        self.list_equipment_sets().await
    }

    /// Sets with at least one item flagged for maintenance
    pub async fn sets_needing_maintenance(&self) -> AppResult<Vec<EquipmentSet>> {
        self.catalog
            .list_equipment_sets(&[EquipmentSetFilter::NeedsMaintenance])
            .await
    }

    pub async fn storage_summary(&self) -> AppResult<Vec<EquipmentSetStorageSummary>> {
        self.repository.equipment_sets.storage_summary().await
    }

    // Equipment

    pub async fn list_equipment(&self) -> AppResult<Vec<Equipment>> {
        self.catalog.list_equipment(&[]).await
    }

    pub async fn search_equipment(&self, query: &ListQuery) -> AppResult<PaginatedResponse<Equipment>> {
        let items = self.list_equipment().await?;
        Ok(PaginatedResponse::search(items, query, equipment_matches))
    }

    pub async fn search_equipment_in_set(
        &self,
        set_id: i32,
        query: &ListQuery,
    ) -> AppResult<PaginatedResponse<Equipment>> {
        let items = self.catalog.list_equipment(&[EquipmentFilter::InSet(set_id)]).await?;
        Ok(PaginatedResponse::search(items, query, equipment_matches))
    }

    pub async fn get_equipment(&self, id: i32) -> AppResult<Equipment> {
        self.catalog
            .list_equipment(&[EquipmentFilter::Id(id)])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    async fn resolve_placement(&self, data: &EquipmentPayload) -> AppResult<(i32, i32)> {
        let set_id = self
            .references
            .resolve(ReferenceKind::EquipmentSet, &data.equipment_set_name)
            .await?;
        let storage_id = self
            .references
            .resolve(ReferenceKind::Warehouse, &data.warehouse_name)
            .await?;
        Ok((set_id, storage_id))
    }

    pub async fn create_equipment(&self, data: &EquipmentPayload) -> AppResult<Vec<Equipment>> {
        let (set_id, storage_id) = self.resolve_placement(data).await?;
        let id = self.repository.equipment.create(set_id, storage_id, data).await?;
        tracing::info!(equipment_id = id, equipment_set_id = set_id, "Equipment created");
        self.list_equipment().await
    }

    pub async fn update_equipment(&self, id: i32, data: &EquipmentPayload) -> AppResult<Vec<Equipment>> {
        let (set_id, storage_id) = self.resolve_placement(data).await?;
        self.repository.equipment.update(id, set_id, storage_id, data).await?;
        self.list_equipment().await
    }

    pub async fn delete_equipment(&self, id: i32) -> AppResult<()> {
        self.repository.equipment.delete(id).await?;
        tracing::info!(equipment_id = id, "Equipment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{set_type::SetType, warehouse::Warehouse},
        repository::{equipment::MockCatalogReader, references::MockReferenceResolver},
    };
    use sqlx::postgres::PgPoolOptions;

    fn item(id: i32, name: &str) -> Equipment {
        Equipment {
            equipment_id: id,
            equipment_set_id: 2,
            equipment_name: name.to_string(),
            description: None,
            serial_number: format!("SN-{}", id),
            storage_id: 1,
            current_storage: None,
            needs_maintenance: false,
            date_of_purchase: None,
            cost_of_purchase: None,
            equipment_set: EquipmentSet {
                equipment_set_id: 2,
                equipment_set_name: "Lighting Kit A".to_string(),
                description: None,
                set_type_id: 1,
                set_type: SetType {
                    set_type_id: 1,
                    set_type_name: "Lighting".to_string(),
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

    /// The pool is never used: every call under test stops at a mock
    fn service(references: MockReferenceResolver, catalog: MockCatalogReader) -> EquipmentService {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://unused@localhost/unused")
            .unwrap();
        EquipmentService::new(Repository::new(pool), Arc::new(references), Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_search_in_set_filters_by_set_and_term() {
        let mut catalog = MockCatalogReader::new();
        catalog
            .expect_list_equipment()
            .withf(|filters| matches!(filters, [EquipmentFilter::InSet(2)]))
            .returning(|_| Ok(vec![item(1, "Fresnel 650"), item(2, "Kino Flo")]));

        let query = ListQuery {
            search: Some("kino".to_string()),
            page: None,
            per_page: None,
        };
        let page = service(MockReferenceResolver::new(), catalog)
            .search_equipment_in_set(2, &query)
            .await
            .unwrap();
        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.items[0].equipment_id, 2);
    }

    #[tokio::test]
    async fn test_missing_equipment_is_not_found() {
        let mut catalog = MockCatalogReader::new();
        catalog.expect_list_equipment().returning(|_| Ok(Vec::new()));

        let result = service(MockReferenceResolver::new(), catalog).get_equipment(9).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_set_stops_before_insert() {
        let mut references = MockReferenceResolver::new();
        references
            .expect_resolve()
            .withf(|kind, name| *kind == ReferenceKind::EquipmentSet && name == "Nope")
            .returning(|_, name| Err(AppError::InvalidReference(format!("Unknown equipment set '{}'", name))));

        let payload = EquipmentPayload {
            equipment_name: "Fresnel 650".to_string(),
            serial_number: "F-650".to_string(),
            equipment_set_name: "Nope".to_string(),
            description: None,
            warehouse_name: "Main".to_string(),
            current_storage: None,
            needs_maintenance: false,
            date_of_purchase: None,
            cost_of_purchase: None,
        };
        let result = service(references, MockCatalogReader::new())
            .create_equipment(&payload)
            .await;
        assert!(matches!(result, Err(AppError::InvalidReference(_))));
    }
}
