//! Draft endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        draft::{Draft, DraftPayload},
        pagination::{ListQuery, PaginatedResponse},
    },
    AppState,
};

use super::{AuthenticatedUser, ItemId};

/// List drafts with search and pagination
///
/// The search term also matches the name or serial number of any item in a draft.
#[utoipa::path(
    get,
    path = "/drafts",
    tag = "drafts",
    security(("bearer_auth" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Drafts", body = PaginatedResponse<Draft>)
    )
)]
pub async fn list_drafts(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PaginatedResponse<Draft>>> {
    let page = state.services.drafts.search_drafts(&query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/drafts/search/{id}",
    tag = "drafts",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Draft with its equipment", body = Draft),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn get_draft(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Draft>> {
    let draft = state.services.drafts.get_draft(id).await?;
    Ok(Json(draft))
}

#[utoipa::path(
    post,
    path = "/drafts",
    tag = "drafts",
    security(("bearer_auth" = [])),
    request_body = DraftPayload,
    responses(
        (status = 201, description = "Draft created, full list returned", body = Vec<Draft>)
    )
)]
pub async fn create_draft(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(payload): Json<DraftPayload>,
) -> AppResult<(StatusCode, Json<Vec<Draft>>)> {
    payload.validate()?;

    let drafts = state.services.drafts.create_draft(&payload).await?;
    Ok((StatusCode::CREATED, Json(drafts)))
}

#[utoipa::path(
    put,
    path = "/drafts/{id}",
    tag = "drafts",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Draft ID")),
    request_body = DraftPayload,
    responses(
        (status = 200, description = "Draft renamed, full list returned", body = Vec<Draft>),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn update_draft(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
    Json(payload): Json<DraftPayload>,
) -> AppResult<Json<Vec<Draft>>> {
    payload.validate()?;

    let drafts = state.services.drafts.update_draft(id, &payload).await?;
    Ok(Json(drafts))
}

#[utoipa::path(
    delete,
    path = "/drafts/{id}",
    tag = "drafts",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Draft ID")),
    responses(
        (status = 200, description = "Draft deleted, full list returned", body = Vec<Draft>),
        (status = 404, description = "Draft not found")
    )
)]
pub async fn delete_draft(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ItemId(id): ItemId,
) -> AppResult<Json<Vec<Draft>>> {
    let drafts = state.services.drafts.delete_draft(id).await?;
    Ok(Json(drafts))
}
