//! Catalog management service: set types, project types and warehouses

use crate::{
    error::AppResult,
    models::{
        pagination::{matches_search, ListQuery, PaginatedResponse},
        project_type::{ProjectType, ProjectTypePayload},
        set_type::{SetType, SetTypePayload},
        warehouse::{Warehouse, WarehousePayload},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // Set types

    pub async fn search_set_types(&self, query: &ListQuery) -> AppResult<PaginatedResponse<SetType>> {
        let items = self.repository.set_types.list().await?;
        Ok(PaginatedResponse::search(items, query, |term, item| {
            matches_search(term, &[item.set_type_id.to_string(), item.set_type_name.clone()])
        }))
    }

    pub async fn get_set_type(&self, id: i32) -> AppResult<SetType> {
        self.repository.set_types.get_by_id(id).await
    }

    pub async fn create_set_type(&self, data: &SetTypePayload) -> AppResult<Vec<SetType>> {
        let id = self.repository.set_types.create(data).await?;
        tracing::info!(set_type_id = id, "Set type created");
        self.repository.set_types.list().await
    }

    pub async fn update_set_type(&self, id: i32, data: &SetTypePayload) -> AppResult<Vec<SetType>> {
        self.repository.set_types.update(id, data).await?;
        self.repository.set_types.list().await
    }

    pub async fn delete_set_type(&self, id: i32) -> AppResult<Vec<SetType>> {
        self.repository.set_types.delete(id).await?;
        tracing::info!(set_type_id = id, "Set type deleted");
        self.repository.set_types.list().await
    }

    // Project types

    pub async fn search_project_types(&self, query: &ListQuery) -> AppResult<PaginatedResponse<ProjectType>> {
        let items = self.repository.project_types.list().await?;
        Ok(PaginatedResponse::search(items, query, |term, item| {
            matches_search(
                term,
                &[
                    item.project_type_id.to_string(),
                    item.project_type_name.clone(),
                    item.neaktor_id.clone().unwrap_or_default(),
                ],
            )
        }))
    }

    pub async fn get_project_type(&self, id: i32) -> AppResult<ProjectType> {
        self.repository.project_types.get_by_id(id).await
    }

    pub async fn create_project_type(&self, data: &ProjectTypePayload) -> AppResult<Vec<ProjectType>> {
        let id = self.repository.project_types.create(data).await?;
        tracing::info!(project_type_id = id, "Project type created");
        self.repository.project_types.list().await
    }

    pub async fn update_project_type(&self, id: i32, data: &ProjectTypePayload) -> AppResult<Vec<ProjectType>> {
        self.repository.project_types.update(id, data).await?;
        self.repository.project_types.list().await
    }

    pub async fn delete_project_type(&self, id: i32) -> AppResult<Vec<ProjectType>> {
        self.repository.project_types.delete(id).await?;
        tracing::info!(project_type_id = id, "Project type deleted");
        self.repository.project_types.list().await
    }

    // Warehouses

    pub async fn search_warehouses(&self, query: &ListQuery) -> AppResult<PaginatedResponse<Warehouse>> {
        let items = self.repository.warehouses.list().await?;
        Ok(PaginatedResponse::search(items, query, |term, item| {
            matches_search(
                term,
                &[
                    item.warehouse_id.to_string(),
                    item.warehouse_name.clone(),
                    item.warehouse_adress.clone().unwrap_or_default(),
                ],
            )
        }))
    }

    pub async fn create_warehouse(&self, data: &WarehousePayload) -> AppResult<Vec<Warehouse>> {
        let id = self.repository.warehouses.create(data).await?;
        tracing::info!(warehouse_id = id, "Warehouse created");
        self.repository.warehouses.list().await
    }

    pub async fn update_warehouse(&self, id: i32, data: &WarehousePayload) -> AppResult<Vec<Warehouse>> {
        self.repository.warehouses.update(id, data).await?;
        self.repository.warehouses.list().await
    }

    pub async fn delete_warehouse(&self, id: i32) -> AppResult<Vec<Warehouse>> {
        self.repository.warehouses.delete(id).await?;
        tracing::info!(warehouse_id = id, "Warehouse deleted");
        self.repository.warehouses.list().await
    }
}
