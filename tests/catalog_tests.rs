//! Catalog writes and name resolution against a real database

mod common;

use sqlx::PgPool;

use gear_tracker::{
    models::{
        equipment::EquipmentPayload,
        pagination::ListQuery,
        project::ProjectPayload,
        set_type::SetTypePayload,
    },
    repository::references::{ReferenceKind, ReferenceResolver},
    AppError,
};

fn equipment_payload(set_name: &str, warehouse_name: &str) -> EquipmentPayload {
    EquipmentPayload {
        equipment_name: "Fresnel 650".to_string(),
        serial_number: "F-650".to_string(),
        equipment_set_name: set_name.to_string(),
        description: None,
        warehouse_name: warehouse_name.to_string(),
        current_storage: None,
        needs_maintenance: true,
        date_of_purchase: Some(common::date("2023-03-01")),
        cost_of_purchase: None,
    }
}

fn project_payload(name: &str, chief: &str, archived: bool) -> ProjectPayload {
    ProjectPayload {
        project_name: name.to_string(),
        project_type_name: "Feature".to_string(),
        archived,
        chief_engineer_name: chief.to_string(),
        shooting_start_date: common::date("2024-06-01"),
        shooting_end_date: common::date("2024-06-10"),
        neaktor_id: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_resolve_names(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let state = common::state(pool);
    let references = &state.repository.references;

    let set_id = references
        .resolve(ReferenceKind::EquipmentSet, "Lighting Kit A")
        .await
        .unwrap();
    assert_eq!(set_id, seed.lighting_kit);

    let chief = references.resolve(ReferenceKind::User, common::CHIEF_ENGINEER).await.unwrap();
    assert_eq!(chief, seed.chief_engineer);

    for kind in [
        ReferenceKind::SetType,
        ReferenceKind::EquipmentSet,
        ReferenceKind::Warehouse,
        ReferenceKind::ProjectType,
        ReferenceKind::User,
    ] {
        let result = references.resolve(kind, "does not exist").await;
        assert!(matches!(result, Err(AppError::InvalidReference(_))), "{:?}", kind);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_equipment_with_unknown_set_is_rejected(pool: PgPool) {
    common::seed(&pool).await;
    let state = common::state(pool);
    let equipment = &state.services.equipment;

    let result = equipment.create_equipment(&equipment_payload("Nope", "Main")).await;
    assert!(matches!(result, Err(AppError::InvalidReference(_))));

    let result = equipment.create_equipment(&equipment_payload("Lighting Kit A", "Nope")).await;
    assert!(matches!(result, Err(AppError::InvalidReference(_))));

    assert_eq!(equipment.list_equipment().await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_equipment_create_and_reports(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let state = common::state(pool);
    let equipment = &state.services.equipment;

    let items = equipment
        .create_equipment(&equipment_payload("Lighting Kit A", "Main"))
        .await
        .unwrap();
    assert_eq!(items.len(), 4);
    let created = items.iter().find(|e| e.serial_number == "F-650").unwrap();
    assert_eq!(created.equipment_set_id, seed.lighting_kit);
    assert!(created.projects.is_empty());

    let maintenance = equipment.sets_needing_maintenance().await.unwrap();
    let names: Vec<&str> = maintenance.iter().map(|s| s.equipment_set_name.as_str()).collect();
    assert_eq!(names, vec!["Lighting Kit A"]);

    let storage = equipment.storage_summary().await.unwrap();
    let lighting = storage
        .iter()
        .find(|row| row.equipment_set_name == "Lighting Kit A")
        .unwrap();
    assert_eq!(lighting.warehouse_name, "Main");
    assert_eq!(lighting.equipment_count, 3);

    equipment.delete_equipment(created.equipment_id).await.unwrap();
    let result = equipment.get_equipment(created.equipment_id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_set_type_writes(pool: PgPool) {
    common::seed(&pool).await;
    let state = common::state(pool);
    let catalog = &state.services.catalog;

    let payload = SetTypePayload {
        set_type_name: "Grip".to_string(),
    };
    let set_types = catalog.create_set_type(&payload).await.unwrap();
    let names: Vec<&str> = set_types.iter().map(|t| t.set_type_name.as_str()).collect();
    assert_eq!(names, vec!["Camera", "Grip", "Lighting"]);

    let duplicate = catalog.create_set_type(&payload).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    // still referenced by "Lighting Kit A"
    let lighting = set_types.iter().find(|t| t.set_type_name == "Lighting").unwrap();
    let in_use = catalog.delete_set_type(lighting.set_type_id).await;
    assert!(matches!(in_use, Err(AppError::Conflict(_))));

    let missing = catalog.get_set_type(9999).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_project_lifecycle(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let state = common::state(pool.clone());
    let projects = &state.services.projects;

    let unknown_chief = projects.create_project(&project_payload("P1", "Nobody", false)).await;
    assert!(matches!(unknown_chief, Err(AppError::InvalidReference(_))));

    let active = projects
        .create_project(&project_payload("P1", common::CHIEF_ENGINEER, false))
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    let p1 = &active[0];
    assert_eq!(p1.chief_engineer.id, seed.chief_engineer);
    assert_eq!(p1.project_type.project_type_name, "Feature");

    common::assign(&pool, p1.project_id, seed.e1).await;
    let details = projects.get_project(p1.project_id).await.unwrap();
    assert_eq!(details.project.equipment_ids, vec![seed.e1]);
    assert_eq!(details.equipment.len(), 1);

    let archived = projects
        .update_project(p1.project_id, &project_payload("P1", common::CHIEF_ENGINEER, true))
        .await
        .unwrap();
    assert_eq!(archived.len(), 1);
    assert!(archived[0].archived);

    let remaining = projects.delete_project(p1.project_id).await.unwrap();
    assert!(remaining.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_inverted_schedule_is_accepted(pool: PgPool) {
    common::seed(&pool).await;
    let state = common::state(pool);

    let mut payload = project_payload("Backwards", common::CHIEF_ENGINEER, false);
    payload.shooting_start_date = common::date("2024-02-10");
    payload.shooting_end_date = common::date("2024-02-01");

    let active = state.services.projects.create_project(&payload).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].shooting_start_date, common::date("2024-02-10"));
    assert_eq!(active[0].shooting_end_date, common::date("2024-02-01"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_drafts_listed_by_name_descending_with_equipment(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let alpha = common::insert_draft(&pool, "Alpha").await;
    common::insert_draft(&pool, "Zulu").await;
    common::assign_to_draft(&pool, alpha, seed.camera).await;
    let state = common::state(pool);

    let all = state.services.drafts.search_drafts(&ListQuery::default()).await.unwrap();
    let names: Vec<&str> = all.items.iter().map(|d| d.draft_name.as_str()).collect();
    assert_eq!(names, vec!["Zulu", "Alpha"]);
    assert!(all.items[0].equipment.is_empty());
    assert_eq!(all.items[1].equipment.len(), 1);
    assert_eq!(all.items[1].equipment[0].equipment_id, seed.camera);
    assert_eq!(all.items[1].equipment[0].equipment_set.equipment_set_name, "Camera Kit");

    // contained items are searchable by serial number
    let query = ListQuery {
        search: Some("c-001".to_string()),
        ..Default::default()
    };
    let found = state.services.drafts.search_drafts(&query).await.unwrap();
    assert_eq!(found.pagination.total, 1);
    assert_eq!(found.items[0].draft_id, alpha);
}
