//! Projects repository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres, QueryBuilder};

use super::equipment::{CatalogReader, EquipmentFilter, EquipmentRepository};
use crate::{
    error::{AppError, AppResult},
    models::{
        membership::Parent,
        project::{Project, ProjectDetails, ProjectPayload, ProjectRow},
    },
};

const SELECT_PROJECT: &str = r#"
    SELECT
        p.project_id,
        p.neaktor_id,
        p.project_name,
        p.archived,
        COALESCE(p.project_type_id, 0) AS project_type_id,
        p.shooting_start_date,
        p.shooting_end_date,
        COALESCE(p.chief_engineer_id, 0) AS chief_engineer_id,
        COALESCE(pt.project_type_name, '') AS project_type_name,
        pt.neaktor_id AS project_type_neaktor_id,
        COALESCE(u.name, '') AS chief_engineer_name
    FROM projects p
    LEFT JOIN project_types pt ON pt.project_type_id = p.project_type_id
    LEFT JOIN users u ON u.id = p.chief_engineer_id
"#;

enum ProjectFilter {
    Archived(bool),
    Id(i32),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectReader: Send + Sync {
    /// Projects with the given archived flag, ordered by start date then id
    async fn list_projects(&self, archived: bool) -> AppResult<Vec<Project>>;

    /// Single project with its equipment ids only
    async fn find_project(&self, id: i32) -> AppResult<Project>;

    /// Single project with full equipment detail
    async fn get_project(&self, id: i32) -> AppResult<ProjectDetails>;
}

#[derive(Debug, FromRow)]
struct ProjectEquipmentRow {
    project_id: i32,
    equipment_id: i32,
}

#[derive(Clone)]
pub struct ProjectsRepository {
    pool: Pool<Postgres>,
    equipment: EquipmentRepository,
}

impl ProjectsRepository {
    pub fn new(pool: Pool<Postgres>, equipment: EquipmentRepository) -> Self {
        Self { pool, equipment }
    }

    async fn select(&self, filter: ProjectFilter) -> AppResult<Vec<Project>> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_PROJECT);
        match filter {
            ProjectFilter::Archived(archived) => {
                builder.push(" WHERE p.archived = ").push_bind(archived);
            }
            ProjectFilter::Id(id) => {
                builder.push(" WHERE p.project_id = ").push_bind(id);
            }
        }
        builder.push(" ORDER BY p.shooting_start_date ASC, p.project_id ASC");

        let rows = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(&self.pool)
            .await?;

        let mut projects: Vec<Project> = rows.into_iter().map(Project::from).collect();
        if projects.is_empty() {
            return Ok(projects);
        }

        let ids: Vec<i32> = projects.iter().map(|p| p.project_id).collect();
        let assignments = sqlx::query_as::<_, ProjectEquipmentRow>(
            r#"
            SELECT project_id, equipment_id
            FROM equipment_in_project
            WHERE project_id = ANY($1)
            ORDER BY project_id ASC, equipment_id ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_project: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in assignments {
            by_project.entry(row.project_id).or_default().push(row.equipment_id);
        }

        for project in &mut projects {
            project.equipment_ids = by_project.remove(&project.project_id).unwrap_or_default();
        }

        Ok(projects)
    }

    pub async fn create(
        &self,
        project_type_id: i32,
        chief_engineer_id: i32,
        data: &ProjectPayload,
    ) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO projects (
                project_name, archived, project_type_id, shooting_start_date,
                shooting_end_date, chief_engineer_id, neaktor_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, NULLIF($7, ''))
            RETURNING project_id
            "#,
        )
        .bind(&data.project_name)
        .bind(data.archived)
        .bind(project_type_id)
        .bind(data.shooting_start_date)
        .bind(data.shooting_end_date)
        .bind(chief_engineer_id)
        .bind(&data.neaktor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)
    }

    pub async fn update(
        &self,
        id: i32,
        project_type_id: i32,
        chief_engineer_id: i32,
        data: &ProjectPayload,
    ) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET project_name = $1,
                archived = $2,
                project_type_id = $3,
                shooting_start_date = $4,
                shooting_end_date = $5,
                chief_engineer_id = $6,
                neaktor_id = COALESCE(NULLIF($7, ''), neaktor_id)
            WHERE project_id = $8
            "#,
        )
        .bind(&data.project_name)
        .bind(data.archived)
        .bind(project_type_id)
        .bind(data.shooting_start_date)
        .bind(data.shooting_end_date)
        .bind(chief_engineer_id)
        .bind(&data.neaktor_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::from_write)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE project_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Project {} not found", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectReader for ProjectsRepository {
    async fn list_projects(&self, archived: bool) -> AppResult<Vec<Project>> {
        self.select(ProjectFilter::Archived(archived)).await
    }

    async fn find_project(&self, id: i32) -> AppResult<Project> {
        self.select(ProjectFilter::Id(id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    async fn get_project(&self, id: i32) -> AppResult<ProjectDetails> {
        let project = self.find_project(id).await?;

        let equipment = self
            .equipment
            .list_equipment(&[EquipmentFilter::AssignedTo(Parent::Project(id))])
            .await?;

        Ok(ProjectDetails { project, equipment })
    }
}
