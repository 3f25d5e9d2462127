//! Projects (productions) service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{
        pagination::{matches_search, ListQuery, PaginatedResponse},
        project::{Project, ProjectDetails, ProjectPayload},
    },
    repository::{
        projects::ProjectReader,
        references::{ReferenceKind, ReferenceResolver},
        Repository,
    },
};

fn project_matches(term: &str, project: &Project) -> bool {
    matches_search(
        term,
        &[
            project.project_id.to_string(),
            project.project_name.clone(),
            project.project_type.project_type_name.clone(),
            project.chief_engineer.name.clone(),
            project.shooting_start_date.to_string(),
            project.shooting_end_date.to_string(),
        ],
    )
}

#[derive(Clone)]
pub struct ProjectsService {
    repository: Repository,
    references: Arc<dyn ReferenceResolver>,
    projects: Arc<dyn ProjectReader>,
}

impl ProjectsService {
    pub fn new(
        repository: Repository,
        references: Arc<dyn ReferenceResolver>,
        projects: Arc<dyn ProjectReader>,
    ) -> Self {
        Self {
            repository,
            references,
            projects,
        }
    }

    pub async fn search_projects(&self, archived: bool, query: &ListQuery) -> AppResult<PaginatedResponse<Project>> {
        let projects = self.projects.list_projects(archived).await?;
        Ok(PaginatedResponse::search(projects, query, project_matches))
    }

    pub async fn get_project(&self, id: i32) -> AppResult<ProjectDetails> {
        self.projects.get_project(id).await
    }

    /// Resolve the project type and chief engineer named in the payload
    async fn resolve_references(&self, data: &ProjectPayload) -> AppResult<(i32, i32)> {
        let project_type_id = self
            .references
            .resolve(ReferenceKind::ProjectType, &data.project_type_name)
            .await?;
        let chief_engineer_id = self
            .references
            .resolve(ReferenceKind::User, &data.chief_engineer_name)
            .await?;
        Ok((project_type_id, chief_engineer_id))
    }

    fn warn_if_inverted(data: &ProjectPayload) {
        if data.schedule().is_inverted() {
            tracing::warn!(
                project_name = %data.project_name,
                start = %data.shooting_start_date,
                end = %data.shooting_end_date,
                "Shooting start date is after end date"
            );
        }
    }

    pub async fn create_project(&self, data: &ProjectPayload) -> AppResult<Vec<Project>> {
        Self::warn_if_inverted(data);
        let (project_type_id, chief_engineer_id) = self.resolve_references(data).await?;

        let id = self
            .repository
            .projects
            .create(project_type_id, chief_engineer_id, data)
            .await?;
        tracing::info!(project_id = id, "Project created");

        self.projects.list_projects(false).await
    }

    /// Returns the list matching the project's new archived flag
    pub async fn update_project(&self, id: i32, data: &ProjectPayload) -> AppResult<Vec<Project>> {
        Self::warn_if_inverted(data);
        let (project_type_id, chief_engineer_id) = self.resolve_references(data).await?;

        self.repository
            .projects
            .update(id, project_type_id, chief_engineer_id, data)
            .await?;

        self.projects.list_projects(data.archived).await
    }

    pub async fn delete_project(&self, id: i32) -> AppResult<Vec<Project>> {
        self.repository.projects.delete(id).await?;
        tracing::info!(project_id = id, "Project deleted");
        self.projects.list_projects(false).await
    }
}
