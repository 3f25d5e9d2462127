//! Warehouse endpoints

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
        warehouse::{Warehouse, WarehousePayload},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// List warehouses with search and pagination
#[utoipa::path(
    get,
    path = "/warehouse",
    tag = "warehouses",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Warehouses", body = PaginatedResponse<Warehouse>)
    )
)]
pub async fn list_warehouses(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Warehouse>>> {
    let page = state.services.catalog.search_warehouses(&query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    post,
    path = "/warehouse",
    tag = "warehouses",
    security(("bearer_auth" = [])),
    request_body = WarehousePayload,
    responses(
        (status = 201, description = "Warehouse created, full list returned", body = Vec<Warehouse>),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_warehouse(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<WarehousePayload>,
) -> AppResult<(StatusCode, Json<Vec<Warehouse>>)> {
    payload.validate()?;

    let warehouses = state.services.catalog.create_warehouse(&payload).await?;
    Ok((StatusCode::CREATED, Json(warehouses)))
}

#[utoipa::path(
    put,
    path = "/warehouse/{id}",
    tag = "warehouses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Warehouse ID")),
    request_body = WarehousePayload,
    responses(
        (status = 200, description = "Warehouse updated, full list returned", body = Vec<Warehouse>),
        (status = 404, description = "Warehouse not found")
    )
)]
pub async fn update_warehouse(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
    Json(payload): Json<WarehousePayload>,
) -> AppResult<Json<Vec<Warehouse>>> {
    payload.validate()?;

    let warehouses = state.services.catalog.update_warehouse(id, &payload).await?;
    Ok(Json(warehouses))
}

#[utoipa::path(
    delete,
    path = "/warehouse/{id}",
    tag = "warehouses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse deleted, full list returned", body = Vec<Warehouse>),
        (status = 404, description = "Warehouse not found"),
        (status = 409, description = "Warehouse still stores equipment")
    )
)]
pub async fn delete_warehouse(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Vec<Warehouse>>> {
    let warehouses = state.services.catalog.delete_warehouse(id).await?;
    Ok(Json(warehouses))
}
