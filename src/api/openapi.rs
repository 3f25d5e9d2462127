//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, drafts, equipment, equipment_in_draft, equipment_in_project, equipment_sets, health, project_types,
    projects, set_types, warehouses,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gear Tracker API",
        version = "1.0.0",
        description = "Production equipment tracking REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::profile,
        auth::lookup_users,
        // Catalog
        set_types::list_set_types,
        set_types::get_set_type,
        set_types::create_set_type,
        set_types::update_set_type,
        set_types::delete_set_type,
        project_types::list_project_types,
        project_types::get_project_type,
        project_types::create_project_type,
        project_types::update_project_type,
        project_types::delete_project_type,
        warehouses::list_warehouses,
        warehouses::create_warehouse,
        warehouses::update_warehouse,
        warehouses::delete_warehouse,
        // Equipment
        equipment_sets::list_equipment_sets,
        equipment_sets::get_equipment_set,
        equipment_sets::sets_needing_maintenance,
        equipment_sets::storage_summary,
        equipment_sets::create_equipment_set,
        equipment_sets::update_equipment_set,
        equipment_sets::delete_equipment_set,
        equipment::list_equipment,
        equipment::list_equipment_in_set,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Projects and drafts
        projects::list_projects,
        projects::list_archived_projects,
        projects::get_project,
        projects::create_project,
        projects::update_project,
        projects::delete_project,
        drafts::list_drafts,
        drafts::get_draft,
        drafts::create_draft,
        drafts::update_draft,
        drafts::delete_draft,
        // Memberships
        equipment_in_project::get_availability,
        equipment_in_project::add_equipment,
        equipment_in_project::add_set,
        equipment_in_project::add_draft,
        equipment_in_project::remove_equipment,
        equipment_in_project::remove_set,
        equipment_in_project::reset,
        equipment_in_project::available_in_set,
        equipment_in_project::conflicting_equipment,
        equipment_in_project::conflicting_projects,
        equipment_in_draft::get_availability,
        equipment_in_draft::add_equipment,
        equipment_in_draft::add_set,
        equipment_in_draft::remove_equipment,
        equipment_in_draft::remove_set,
        equipment_in_draft::available_in_set,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::UserProfile,
            crate::models::user::UserShort,
            crate::models::user::RegisterUserPayload,
            crate::models::user::LoginUserPayload,
            crate::models::user::LoginResponse,
            // Catalog
            crate::models::set_type::SetType,
            crate::models::set_type::SetTypePayload,
            crate::models::project_type::ProjectType,
            crate::models::project_type::ProjectTypePayload,
            crate::models::warehouse::Warehouse,
            crate::models::warehouse::WarehousePayload,
            crate::models::equipment_set::EquipmentSet,
            crate::models::equipment_set::EquipmentSetPayload,
            crate::models::equipment_set::EquipmentSetStorageSummary,
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentPayload,
            // Projects and drafts
            crate::models::project::Project,
            crate::models::project::ProjectSummary,
            crate::models::project::ProjectDetails,
            crate::models::project::ProjectPayload,
            crate::models::draft::Draft,
            crate::models::draft::DraftPayload,
            // Memberships
            crate::models::membership::EquipmentInProjectResponse,
            crate::models::membership::EquipmentInDraftResponse,
            crate::models::membership::EquipmentInProjectPayload,
            crate::models::membership::ProjectSetPayload,
            crate::models::membership::ProjectSetDeletePayload,
            crate::models::membership::AddDraftToProjectPayload,
            crate::models::membership::EquipmentInDraftPayload,
            crate::models::membership::DraftSetPayload,
            crate::models::membership::DraftSetDeletePayload,
            crate::models::conflict::EquipmentConflict,
            crate::models::conflict::ConflictingProject,
            crate::models::conflict::ConflictingEquipmentPayload,
            // Pagination
            crate::models::pagination::Pagination,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration, login and current user"),
        (name = "set_types", description = "Equipment set types"),
        (name = "project_types", description = "Project types"),
        (name = "warehouses", description = "Storage locations"),
        (name = "equipment_sets", description = "Equipment sets and reports"),
        (name = "equipment", description = "Equipment catalog"),
        (name = "projects", description = "Shooting projects"),
        (name = "drafts", description = "Reusable equipment lists"),
        (name = "equipment_in_project", description = "Project equipment assignment and conflicts"),
        (name = "equipment_in_draft", description = "Draft equipment membership")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
