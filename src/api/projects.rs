//! Project (production) endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        pagination::{ListQuery, PaginatedResponse},
        project::{Project, ProjectDetails, ProjectPayload},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// List active projects with search and pagination
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Active projects", body = PaginatedResponse<Project>)
    )
)]
pub async fn list_projects(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Project>>> {
    let page = state.services.projects.search_projects(false, &query).await?;
    Ok(Json(page))
}

/// List archived projects with search and pagination
#[utoipa::path(
    get,
    path = "/projects/archived",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Archived projects", body = PaginatedResponse<Project>)
    )
)]
pub async fn list_archived_projects(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Project>>> {
    let page = state.services.projects.search_projects(true, &query).await?;
    Ok(Json(page))
}

/// Project with its assigned equipment
#[utoipa::path(
    get,
    path = "/projects/search/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project details", body = ProjectDetails),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<ProjectDetails>> {
    let project = state.services.projects.get_project(id).await?;
    Ok(Json(project))
}

#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    security(("bearer_auth" = [])),
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Project created, active projects returned", body = Vec<Project>),
        (status = 400, description = "Unknown project type or chief engineer")
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(payload): Json<ProjectPayload>,
) -> AppResult<(StatusCode, Json<Vec<Project>>)> {
    payload.validate()?;

    tracing::debug!(user_id = claims.user_id, project_name = %payload.project_name, "Creating project");
    let projects = state.services.projects.create_project(&payload).await?;
    Ok((StatusCode::CREATED, Json(projects)))
}

#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    request_body = ProjectPayload,
    responses(
        (status = 200, description = "Project updated, projects with the same archived flag returned", body = Vec<Project>),
        (status = 400, description = "Unknown project type or chief engineer"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn update_project(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
    Json(payload): Json<ProjectPayload>,
) -> AppResult<Json<Vec<Project>>> {
    payload.validate()?;

    let projects = state.services.projects.update_project(id, &payload).await?;
    Ok(Json(projects))
}

#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted, active projects returned", body = Vec<Project>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn delete_project(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Vec<Project>>> {
    let projects = state.services.projects.delete_project(id).await?;
    Ok(Json(projects))
}
