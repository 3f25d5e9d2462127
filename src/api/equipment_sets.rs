//! Equipment set endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        equipment_set::{EquipmentSet, EquipmentSetPayload, EquipmentSetStorageSummary},
        pagination::{ListQuery, PaginatedResponse},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// List equipment sets with search and pagination
#[utoipa::path(
    get,
    path = "/equipment_set",
    tag = "equipment_sets",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Equipment sets", body = PaginatedResponse<EquipmentSet>),
        (status = 403, description = "Not authorized")
    )
)]
pub async fn list_equipment_sets(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<EquipmentSet>>> {
    let page = state.services.equipment.search_equipment_sets(&query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/equipment_set/search/{id}",
    tag = "equipment_sets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment set ID")),
    responses(
        (status = 200, description = "Equipment set", body = EquipmentSet),
        (status = 404, description = "Equipment set not found")
    )
)]
pub async fn get_equipment_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<EquipmentSet>> {
    let set = state.services.equipment.get_equipment_set(id).await?;
    Ok(Json(set))
}

/// Sets containing at least one item flagged for maintenance
#[utoipa::path(
    get,
    path = "/equipment_set/maintenance",
    tag = "equipment_sets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Sets needing maintenance", body = Vec<EquipmentSet>)
    )
)]
pub async fn sets_needing_maintenance(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<EquipmentSet>>> {
    let sets = state.services.equipment.sets_needing_maintenance().await?;
    Ok(Json(sets))
}

/// Item count per set and warehouse
#[utoipa::path(
    get,
    path = "/equipment_set/storage",
    tag = "equipment_sets",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Storage summary", body = Vec<EquipmentSetStorageSummary>)
    )
)]
pub async fn storage_summary(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<EquipmentSetStorageSummary>>> {
    let summary = state.services.equipment.storage_summary().await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/equipment_set",
    tag = "equipment_sets",
    security(("bearer_auth" = [])),
    request_body = EquipmentSetPayload,
    responses(
        (status = 201, description = "Equipment set created, full list returned", body = Vec<EquipmentSet>),
        (status = 400, description = "Unknown set type"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_equipment_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<EquipmentSetPayload>,
) -> AppResult<(StatusCode, Json<Vec<EquipmentSet>>)> {
    payload.validate()?;

    let sets = state.services.equipment.create_equipment_set(&payload).await?;
    Ok((StatusCode::CREATED, Json(sets)))
}

#[utoipa::path(
    put,
    path = "/equipment_set/{id}",
    tag = "equipment_sets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment set ID")),
    request_body = EquipmentSetPayload,
    responses(
        (status = 200, description = "Equipment set updated, full list returned", body = Vec<EquipmentSet>),
        (status = 400, description = "Unknown set type"),
        (status = 404, description = "Equipment set not found")
    )
)]
pub async fn update_equipment_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
    Json(payload): Json<EquipmentSetPayload>,
) -> AppResult<Json<Vec<EquipmentSet>>> {
    payload.validate()?;

    let sets = state.services.equipment.update_equipment_set(id, &payload).await?;
    Ok(Json(sets))
}

#[utoipa::path(
    delete,
    path = "/equipment_set/{id}",
    tag = "equipment_sets",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Equipment set ID")),
    responses(
        (status = 200, description = "Equipment set deleted, full list returned", body = Vec<EquipmentSet>),
        (status = 404, description = "Equipment set not found"),
        (status = 409, description = "Set still contains equipment")
    )
)]
pub async fn delete_equipment_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Vec<EquipmentSet>>> {
    let sets = state.services.equipment.delete_equipment_set(id).await?;
    Ok(Json(sets))
}
