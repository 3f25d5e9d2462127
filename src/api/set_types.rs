//! Set type endpoints

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
        set_type::{SetType, SetTypePayload},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// List set types with search and pagination
#[utoipa::path(
    get,
    path = "/set_types",
    tag = "set_types",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Set types", body = PaginatedResponse<SetType>),
        (status = 403, description = "Not authorized")
    )
)]
pub async fn list_set_types(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<SetType>>> {
    let page = state.services.catalog.search_set_types(&query).await?;
    Ok(Json(page))
}

/// Get a set type by ID
#[utoipa::path(
    get,
    path = "/set_types/{id}",
    tag = "set_types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Set type ID")),
    responses(
        (status = 200, description = "Set type", body = SetType),
        (status = 404, description = "Set type not found")
    )
)]
pub async fn get_set_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<SetType>> {
    let set_type = state.services.catalog.get_set_type(id).await?;
    Ok(Json(set_type))
}

/// Create a set type
#[utoipa::path(
    post,
    path = "/set_types",
    tag = "set_types",
    security(("bearer_auth" = [])),
    request_body = SetTypePayload,
    responses(
        (status = 201, description = "Set type created, full list returned", body = Vec<SetType>),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_set_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<SetTypePayload>,
) -> AppResult<(StatusCode, Json<Vec<SetType>>)> {
    payload.validate()?;

    let set_types = state.services.catalog.create_set_type(&payload).await?;
    Ok((StatusCode::CREATED, Json(set_types)))
}

/// Rename a set type
#[utoipa::path(
    put,
    path = "/set_types/{id}",
    tag = "set_types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Set type ID")),
    request_body = SetTypePayload,
    responses(
        (status = 200, description = "Set type updated, full list returned", body = Vec<SetType>),
        (status = 404, description = "Set type not found")
    )
)]
pub async fn update_set_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
    Json(payload): Json<SetTypePayload>,
) -> AppResult<Json<Vec<SetType>>> {
    payload.validate()?;

    let set_types = state.services.catalog.update_set_type(id, &payload).await?;
    Ok(Json(set_types))
}

/// Delete a set type
#[utoipa::path(
    delete,
    path = "/set_types/{id}",
    tag = "set_types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Set type ID")),
    responses(
        (status = 200, description = "Set type deleted, full list returned", body = Vec<SetType>),
        (status = 404, description = "Set type not found"),
        (status = 409, description = "Set type still used by equipment sets")
    )
)]
pub async fn delete_set_type(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Vec<SetType>>> {
    let set_types = state.services.catalog.delete_set_type(id).await?;
    Ok(Json(set_types))
}
