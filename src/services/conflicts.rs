//! Scheduling conflict detection between productions

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::conflict::{ConflictingProject, EquipmentConflict},
    repository::{conflicts::ConflictStore, projects::ProjectReader},
};

#[derive(Clone)]
pub struct ConflictService {
    projects: Arc<dyn ProjectReader>,
    conflicts: Arc<dyn ConflictStore>,
}

impl ConflictService {
    pub fn new(projects: Arc<dyn ProjectReader>, conflicts: Arc<dyn ConflictStore>) -> Self {
        Self { projects, conflicts }
    }

    /// Double-booked equipment of one project. An unknown project is
    /// `NotFound` rather than an empty list.
    pub async fn conflicting_equipment(&self, project_id: i32) -> AppResult<Vec<EquipmentConflict>> {
        let subject = self.projects.find_project(project_id).await?;
        if subject.archived {
            tracing::debug!(project_id, "Conflict check on an archived project");
        }

        let conflicts = self.conflicts.conflicting_equipment(project_id).await?;
        if !conflicts.is_empty() {
            tracing::info!(project_id, conflicts = conflicts.len(), "Equipment double-booked");
        }
        Ok(conflicts)
    }

    pub async fn conflicting_projects(&self) -> AppResult<Vec<ConflictingProject>> {
        self.conflicts.conflicting_projects().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::{project::Project, project_type::ProjectType, user::UserShort},
        repository::{conflicts::MockConflictStore, projects::MockProjectReader},
    };
    use mockall::predicate::eq;

    fn archived_project(id: i32) -> Project {
        Project {
            project_id: id,
            neaktor_id: None,
            project_name: "Wrapped Feature".to_string(),
            archived: true,
            project_type_id: 0,
            shooting_start_date: "2024-03-01".parse().unwrap(),
            shooting_end_date: "2024-03-05".parse().unwrap(),
            chief_engineer_id: 0,
            project_type: ProjectType::placeholder(),
            chief_engineer: UserShort {
                id: 0,
                name: String::new(),
            },
            equipment_ids: vec![1],
        }
    }

    #[tokio::test]
    async fn test_archived_subject_still_reports_conflicts() {
        let mut projects = MockProjectReader::new();
        projects
            .expect_find_project()
            .with(eq(3))
            .times(1)
            .returning(|id| Ok(archived_project(id)));
        projects.expect_get_project().never();
        let mut conflicts = MockConflictStore::new();
        conflicts.expect_conflicting_equipment().with(eq(3)).returning(|_| {
            Ok(vec![EquipmentConflict {
                equipment_id: 1,
                equipment_name: "E1".to_string(),
                equipment_set_name: "Lighting Kit A".to_string(),
                project_id: 4,
                project_name: "Other".to_string(),
            }])
        });

        let service = ConflictService::new(Arc::new(projects), Arc::new(conflicts));
        let result = service.conflicting_equipment(3).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].project_id, 4);
    }

    #[tokio::test]
    async fn test_unknown_project_is_not_found() {
        let mut projects = MockProjectReader::new();
        projects
            .expect_find_project()
            .returning(|id| Err(AppError::NotFound(format!("Project {} not found", id))));
        let mut conflicts = MockConflictStore::new();
        conflicts.expect_conflicting_equipment().never();

        let service = ConflictService::new(Arc::new(projects), Arc::new(conflicts));
        let result = service.conflicting_equipment(99).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
