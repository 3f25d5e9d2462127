//! Project type endpoints

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
        project_type::{ProjectType, ProjectTypePayload},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// List project types with search and pagination
#[utoipa::path(
    get,
    path = "/project_types",
    tag = "project_types",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Project types", body = PaginatedResponse<ProjectType>),
        (status = 403, description = "Not authorized")
    )
)]
pub async fn list_project_types(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<ProjectType>>> {
    let page = state.services.catalog.search_project_types(&query).await?;
    Ok(Json(page))
}

/// Get a set type by ID
#[utoipa::path(
    get,
    path = "/project_types/{id}",
    tag = "project_types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project type ID")),
    responses(
        (status = 200, description = "Project type", body = ProjectType),
        (status = 404, description = "Project type not found")
    )
)]
pub async fn get_project_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<ProjectType>> {
    let project_type = state.services.catalog.get_project_type(id).await?;
    Ok(Json(project_type))
}

/// Create a set type
#[utoipa::path(
    post,
    path = "/project_types",
    tag = "project_types",
    security(("bearer_auth" = [])),
    request_body = ProjectTypePayload,
    responses(
        (status = 201, description = "Project type created, full list returned", body = Vec<ProjectType>),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_project_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<ProjectTypePayload>,
) -> AppResult<(StatusCode, Json<Vec<ProjectType>>)> {
    payload.validate()?;

    let project_types = state.services.catalog.create_project_type(&payload).await?;
    Ok((StatusCode::CREATED, Json(project_types)))
}

/// Rename a set type
#[utoipa::path(
    put,
    path = "/project_types/{id}",
    tag = "project_types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project type ID")),
    request_body = ProjectTypePayload,
    responses(
        (status = 200, description = "Project type updated, full list returned", body = Vec<ProjectType>),
        (status = 404, description = "Project type not found")
    )
)]
pub async fn update_project_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
    Json(payload): Json<ProjectTypePayload>,
) -> AppResult<Json<Vec<ProjectType>>> {
    payload.validate()?;

    let project_types = state.services.catalog.update_project_type(id, &payload).await?;
    Ok(Json(project_types))
}

/// Delete a set type
#[utoipa::path(
    delete,
    path = "/project_types/{id}",
    tag = "project_types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project type ID")),
    responses(
        (status = 200, description = "Project type deleted, full list returned", body = Vec<ProjectType>),
        (status = 404, description = "Project type not found"),
        (status = 409, description = "Project type still used by projects")
    )
)]
pub async fn delete_project_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Vec<ProjectType>>> {
    let project_types = state.services.catalog.delete_project_type(id).await?;
    Ok(Json(project_types))
}
