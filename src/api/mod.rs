//! API handlers for Gear Tracker REST endpoints

pub mod auth;
pub mod drafts;
pub mod equipment;
pub mod equipment_in_draft;
pub mod equipment_in_project;
pub mod equipment_sets;
pub mod health;
pub mod openapi;
pub mod project_types;
pub mod projects;
pub mod set_types;
pub mod warehouses;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{header::AUTHORIZATION, request::Parts},
    routing::{delete, get, post, put},
    Router,
};
use axum_extra::extract::CookieJar;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Extractor for authenticated user from JWT token
///
/// The token is read from the `Authorization: Bearer` header, then from the
/// session cookie. A missing or invalid token is a permission failure.
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string());

        let token = match bearer {
            Some(token) => token,
            None => CookieJar::from_headers(&parts.headers)
                .get(&state.config.auth.cookie_name)
                .map(|cookie| cookie.value().to_string())
                .ok_or_else(|| AppError::Authorization("Not authorized".to_string()))?,
        };

        let claims = state.services.users.verify_token(&token)?;
        Ok(AuthenticatedUser(claims))
    }
}

/// Positive integer id taken from the last path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i32);

impl ItemId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(ItemId(id)),
            _ => Err(AppError::BadRequest(format!("Invalid id '{}'", raw))),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        ItemId::parse(&raw)
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/profile", get(auth::profile))
        .route("/users/lookup", get(auth::lookup_users))
        // Set types
        .route("/set_types", get(set_types::list_set_types).post(set_types::create_set_type))
        .route(
            "/set_types/:id",
            get(set_types::get_set_type)
                .put(set_types::update_set_type)
                .delete(set_types::delete_set_type),
        )
        // Project types
        .route(
            "/project_types",
            get(project_types::list_project_types).post(project_types::create_project_type),
        )
        .route(
            "/project_types/:id",
            get(project_types::get_project_type)
                .put(project_types::update_project_type)
                .delete(project_types::delete_project_type),
        )
        // Warehouses
        .route("/warehouse", get(warehouses::list_warehouses).post(warehouses::create_warehouse))
        .route(
            "/warehouse/:id",
            put(warehouses::update_warehouse).delete(warehouses::delete_warehouse),
        )
        // Equipment sets
        .route(
            "/equipment_set",
            get(equipment_sets::list_equipment_sets).post(equipment_sets::create_equipment_set),
        )
        .route("/equipment_set/search/:id", get(equipment_sets::get_equipment_set))
        .route("/equipment_set/maintenance", get(equipment_sets::sets_needing_maintenance))
        .route("/equipment_set/storage", get(equipment_sets::storage_summary))
        .route(
            "/equipment_set/:id",
            put(equipment_sets::update_equipment_set).delete(equipment_sets::delete_equipment_set),
        )
        // Equipment
        .route("/equipment", get(equipment::list_equipment).post(equipment::create_equipment))
        .route("/equipment/set/:id", get(equipment::list_equipment_in_set))
        .route("/equipment/search/:id", get(equipment::get_equipment))
        .route(
            "/equipment/:id",
            put(equipment::update_equipment).delete(equipment::delete_equipment),
        )
        // Projects
        .route("/projects", get(projects::list_projects).post(projects::create_project))
        .route("/projects/archived", get(projects::list_archived_projects))
        .route("/projects/search/:id", get(projects::get_project))
        .route(
            "/projects/:id",
            put(projects::update_project).delete(projects::delete_project),
        )
        // Drafts
        .route("/drafts", get(drafts::list_drafts).post(drafts::create_draft))
        .route("/drafts/search/:id", get(drafts::get_draft))
        .route("/drafts/:id", put(drafts::update_draft).delete(drafts::delete_draft))
        // Equipment in project
        .route("/equipment_in_project/:id", get(equipment_in_project::get_availability))
        .route("/equipment_in_project/add", post(equipment_in_project::add_equipment))
        .route("/equipment_in_project/add_set", post(equipment_in_project::add_set))
        .route("/equipment_in_project/add_draft", post(equipment_in_project::add_draft))
        .route("/equipment_in_project/del", put(equipment_in_project::remove_equipment))
        .route("/equipment_in_project/del_set", put(equipment_in_project::remove_set))
        .route("/equipment_in_project/reset/:id", delete(equipment_in_project::reset))
        .route(
            "/equipment_in_project/equipment_in_set",
            post(equipment_in_project::available_in_set),
        )
        .route(
            "/equipment_in_project/conflicting",
            post(equipment_in_project::conflicting_equipment),
        )
        .route(
            "/equipment_in_project/conflicting_projects",
            post(equipment_in_project::conflicting_projects),
        )
        // Equipment in draft
        .route("/equipment_in_draft/:id", get(equipment_in_draft::get_availability))
        .route("/equipment_in_draft/add", post(equipment_in_draft::add_equipment))
        .route("/equipment_in_draft/add_set", post(equipment_in_draft::add_set))
        .route("/equipment_in_draft/del", put(equipment_in_draft::remove_equipment))
        .route("/equipment_in_draft/del_set", put(equipment_in_draft::remove_set))
        .route(
            "/equipment_in_draft/equipment_in_set",
            post(equipment_in_draft::available_in_set),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_must_be_positive() {
        assert_eq!(ItemId::parse("12").unwrap(), ItemId(12));
        assert!(matches!(ItemId::parse("0"), Err(AppError::BadRequest(_))));
        assert!(matches!(ItemId::parse("-3"), Err(AppError::BadRequest(_))));
        assert!(matches!(ItemId::parse("abc"), Err(AppError::BadRequest(_))));
    }
}
