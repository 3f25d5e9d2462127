//! Equipment membership of drafts

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        equipment::Equipment,
        membership::{DraftSetDeletePayload, DraftSetPayload, EquipmentInDraftPayload, EquipmentInDraftResponse, Parent},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

#[utoipa::path(
    get,
    path = "/equipment_in_draft/{id}",
    tag = "equipment_in_draft",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Draft availability", body = EquipmentInDraftResponse),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn get_availability(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(draft_id): ItemId,
) -> AppResult<Json<EquipmentInDraftResponse>> {
    let availability = state.services.availability.compute(Parent::Draft(draft_id)).await?;
    Ok(Json(EquipmentInDraftResponse::try_from(availability)?))
}

#[utoipa::path(
    post,
    path = "/equipment_in_draft/add",
    tag = "equipment_in_draft",
    security(("bearer_auth" = [])),
    request_body = EquipmentInDraftPayload,
    responses(
        (status = 200, description = "Equipment added", body = EquipmentInDraftResponse),
        (status = 404, description = "Draft or equipment not found")
    )
)]
pub async fn add_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<EquipmentInDraftPayload>,
) -> AppResult<Json<EquipmentInDraftResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .add_equipment(Parent::Draft(payload.draft_id), payload.equipment_id)
        .await?;
    Ok(Json(EquipmentInDraftResponse::try_from(availability)?))
}

#[utoipa::path(
    post,
    path = "/equipment_in_draft/add_set",
    tag = "equipment_in_draft",
    security(("bearer_auth" = [])),
    request_body = DraftSetPayload,
    responses(
        (status = 200, description = "Set added", body = EquipmentInDraftResponse),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn add_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<DraftSetPayload>,
) -> AppResult<Json<EquipmentInDraftResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .add_set(Parent::Draft(payload.draft_id), payload.equipment_set_id)
        .await?;
    Ok(Json(EquipmentInDraftResponse::try_from(availability)?))
}

#[utoipa::path(
    put,
    path = "/equipment_in_draft/del",
    tag = "equipment_in_draft",
    security(("bearer_auth" = [])),
    request_body = EquipmentInDraftPayload,
    responses(
        (status = 200, description = "Equipment removed", body = EquipmentInDraftResponse),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn remove_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<EquipmentInDraftPayload>,
) -> AppResult<Json<EquipmentInDraftResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .remove_equipment(Parent::Draft(payload.draft_id), payload.equipment_id)
        .await?;
    Ok(Json(EquipmentInDraftResponse::try_from(availability)?))
}

#[utoipa::path(
    put,
    path = "/equipment_in_draft/del_set",
    tag = "equipment_in_draft",
    security(("bearer_auth" = [])),
    request_body = DraftSetDeletePayload,
    responses(
        (status = 200, description = "Set removed", body = EquipmentInDraftResponse),
        (status = 400, description = "Unknown equipment set"),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn remove_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<DraftSetDeletePayload>,
) -> AppResult<Json<EquipmentInDraftResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .remove_set(Parent::Draft(payload.draft_id), &payload.equipment_set_name)
        .await?;
    Ok(Json(EquipmentInDraftResponse::try_from(availability)?))
}

#[utoipa::path(
    post,
    path = "/equipment_in_draft/equipment_in_set",
    tag = "equipment_in_draft",
    security(("bearer_auth" = [])),
    request_body = DraftSetPayload,
    responses(
        (status = 200, description = "Items of the set not yet in the draft", body = Vec<Equipment>)
    )
)]
pub async fn available_in_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<DraftSetPayload>,
) -> AppResult<Json<Vec<Equipment>>> {
    payload.validate()?;

    let equipment = state
        .services
        .availability
        .available_in_set(Parent::Draft(payload.draft_id), payload.equipment_set_id)
        .await?;
    Ok(Json(equipment))
}
