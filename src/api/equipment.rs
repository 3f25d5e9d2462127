//! Equipment API endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentPayload},
        pagination::{ListQuery, PaginatedResponse},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// List equipment with search and pagination
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Equipment list", body = PaginatedResponse<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Equipment>>> {
    let page = state.services.equipment.search_equipment(&query).await?;
    Ok(Json(page))
}

/// List the equipment of one set
#[utoipa::path(
    get,
    path = "/equipment/set/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment set ID"), ListQuery),
    responses(
        (status = 200, description = "Equipment in the set", body = PaginatedResponse<Equipment>)
    )
)]
pub async fn list_equipment_in_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(set_id): ItemId,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Equipment>>> {
    let page = state.services.equipment.search_equipment_in_set(set_id, &query).await?;
    Ok(Json(page))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/search/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_equipment(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = EquipmentPayload,
    responses(
        (status = 201, description = "Equipment created, full list returned", body = Vec<Equipment>),
        (status = 400, description = "Unknown equipment set or warehouse")
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<EquipmentPayload>,
) -> AppResult<(StatusCode, Json<Vec<Equipment>>)> {
    payload.validate()?;

    let equipment = state.services.equipment.create_equipment(&payload).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = EquipmentPayload,
    responses(
        (status = 200, description = "Equipment updated, full list returned", body = Vec<Equipment>),
        (status = 400, description = "Unknown equipment set or warehouse"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
    Json(payload): Json<EquipmentPayload>,
) -> AppResult<Json<Vec<Equipment>>> {
    payload.validate()?;

    let equipment = state.services.equipment.update_equipment(id, &payload).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<StatusCode> {
    state.services.equipment.delete_equipment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
