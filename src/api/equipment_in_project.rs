//! Equipment assignment to projects, and scheduling conflicts

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        conflict::{ConflictingEquipmentPayload, ConflictingProject, EquipmentConflict},
        equipment::Equipment,
        membership::{
            AddDraftToProjectPayload, EquipmentInProjectPayload, EquipmentInProjectResponse, Parent,
            ProjectSetDeletePayload, ProjectSetPayload,
        },
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// Assigned equipment, available equipment and the sets of the available equipment
#[utoipa::path(
    get,
    path = "/equipment_in_project/{id}",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project availability", body = EquipmentInProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn get_availability(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(project_id): ItemId,
) -> AppResult<Json<EquipmentInProjectResponse>> {
    let availability = state.services.availability.compute(Parent::Project(project_id)).await?;
    Ok(Json(EquipmentInProjectResponse::try_from(availability)?))
}

#[utoipa::path(
    post,
    path = "/equipment_in_project/add",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    request_body = EquipmentInProjectPayload,
    responses(
        (status = 200, description = "Equipment assigned", body = EquipmentInProjectResponse),
        (status = 404, description = "Project or equipment not found")
    )
)]
pub async fn add_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<EquipmentInProjectPayload>,
) -> AppResult<Json<EquipmentInProjectResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .add_equipment(Parent::Project(payload.project_id), payload.equipment_id)
        .await?;
    Ok(Json(EquipmentInProjectResponse::try_from(availability)?))
}

/// Assign every item of a set
#[utoipa::path(
    post,
    path = "/equipment_in_project/add_set",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    request_body = ProjectSetPayload,
    responses(
        (status = 200, description = "Set assigned", body = EquipmentInProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn add_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<ProjectSetPayload>,
) -> AppResult<Json<EquipmentInProjectResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .add_set(Parent::Project(payload.project_id), payload.equipment_set_id)
        .await?;
    Ok(Json(EquipmentInProjectResponse::try_from(availability)?))
}

/// Copy the equipment of a draft into a project
#[utoipa::path(
    post,
    path = "/equipment_in_project/add_draft",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    request_body = AddDraftToProjectPayload,
    responses(
        (status = 200, description = "Draft equipment assigned", body = EquipmentInProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn add_draft(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<AddDraftToProjectPayload>,
) -> AppResult<Json<EquipmentInProjectResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .add_draft_to_project(payload.project_id, payload.draft_id)
        .await?;
    Ok(Json(EquipmentInProjectResponse::try_from(availability)?))
}

#[utoipa::path(
    put,
    path = "/equipment_in_project/del",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    request_body = EquipmentInProjectPayload,
    responses(
        (status = 200, description = "Equipment unassigned", body = EquipmentInProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn remove_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<EquipmentInProjectPayload>,
) -> AppResult<Json<EquipmentInProjectResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .remove_equipment(Parent::Project(payload.project_id), payload.equipment_id)
        .await?;
    Ok(Json(EquipmentInProjectResponse::try_from(availability)?))
}

/// Unassign every item of the set with the given name
#[utoipa::path(
    put,
    path = "/equipment_in_project/del_set",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    request_body = ProjectSetDeletePayload,
    responses(
        (status = 200, description = "Set unassigned", body = EquipmentInProjectResponse),
        (status = 400, description = "Unknown equipment set"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn remove_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<ProjectSetDeletePayload>,
) -> AppResult<Json<EquipmentInProjectResponse>> {
    payload.validate()?;

    let availability = state
        .services
        .availability
        .remove_set(Parent::Project(payload.project_id), &payload.equipment_set_name)
        .await?;
    Ok(Json(EquipmentInProjectResponse::try_from(availability)?))
}

/// Unassign all equipment of a project
#[utoipa::path(
    delete,
    path = "/equipment_in_project/reset/{id}",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project emptied", body = EquipmentInProjectResponse),
        (status = 404, description = "Project not found")
    )
)]
pub async fn reset(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(project_id): ItemId,
) -> AppResult<Json<EquipmentInProjectResponse>> {
    let availability = state.services.availability.reset_project(project_id).await?;
    Ok(Json(EquipmentInProjectResponse::try_from(availability)?))
}

/// Items of one set still available to a project
#[utoipa::path(
    post,
    path = "/equipment_in_project/equipment_in_set",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    request_body = ProjectSetPayload,
    responses(
        (status = 200, description = "Available items of the set", body = Vec<Equipment>)
    )
)]
pub async fn available_in_set(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<ProjectSetPayload>,
) -> AppResult<Json<Vec<Equipment>>> {
    payload.validate()?;

    let equipment = state
        .services
        .availability
        .available_in_set(Parent::Project(payload.project_id), payload.equipment_set_id)
        .await?;
    Ok(Json(equipment))
}

/// Equipment of a project also booked by an overlapping active project
#[utoipa::path(
    post,
    path = "/equipment_in_project/conflicting",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    request_body = ConflictingEquipmentPayload,
    responses(
        (status = 200, description = "Double-booked equipment", body = Vec<EquipmentConflict>),
        (status = 404, description = "Project not found")
    )
)]
pub async fn conflicting_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<ConflictingEquipmentPayload>,
) -> AppResult<Json<Vec<EquipmentConflict>>> {
    payload.validate()?;

    let conflicts = state.services.conflicts.conflicting_equipment(payload.project_id).await?;
    Ok(Json(conflicts))
}

/// Active projects sharing equipment with an overlapping active project
#[utoipa::path(
    post,
    path = "/equipment_in_project/conflicting_projects",
    tag = "equipment_in_project",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Projects with double-booked equipment", body = Vec<ConflictingProject>)
    )
)]
pub async fn conflicting_projects(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<ConflictingProject>>> {
    let projects = state.services.conflicts.conflicting_projects().await?;
    Ok(Json(projects))
}
