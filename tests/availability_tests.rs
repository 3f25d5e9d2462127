//! Availability reconciliation against a real database

mod common;

use std::collections::HashSet;

use sqlx::PgPool;

use gear_tracker::{
    models::membership::{Availability, Parent},
    AppError,
};

fn ids(availability: &Availability) -> (Vec<i32>, Vec<i32>) {
    (
        availability.assigned.iter().map(|e| e.equipment_id).collect(),
        availability.available.iter().map(|e| e.equipment_id).collect(),
    )
}

fn set_names(availability: &Availability) -> Vec<&str> {
    availability
        .sets
        .iter()
        .map(|set| set.equipment_set_name.as_str())
        .collect()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partition_covers_catalog(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    let state = common::state(pool);
    let availability = &state.services.availability;

    let after = availability.add_equipment(Parent::Project(p1), seed.e1).await.unwrap();
    let (assigned, available) = ids(&after);
    assert_eq!(assigned, vec![seed.e1]);
    // ordered by name: "Alexa Mini", "E2"
    assert_eq!(available, vec![seed.camera, seed.e2]);

    let assigned: HashSet<i32> = assigned.into_iter().collect();
    let available: HashSet<i32> = available.into_iter().collect();
    assert!(assigned.is_disjoint(&available));
    let all: HashSet<i32> = [seed.e1, seed.e2, seed.camera].into_iter().collect();
    assert_eq!(&assigned | &available, all);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_and_remove_are_idempotent(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    let state = common::state(pool);
    let availability = &state.services.availability;
    let parent = Parent::Project(p1);

    let once = availability.add_equipment(parent, seed.e1).await.unwrap();
    let twice = availability.add_equipment(parent, seed.e1).await.unwrap();
    assert_eq!(ids(&once), ids(&twice));

    let removed = availability.remove_equipment(parent, seed.e2).await.unwrap();
    assert_eq!(ids(&removed), ids(&once));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_whole_set_leaves_available_sets(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    let state = common::state(pool.clone());
    let availability = &state.services.availability;
    let parent = Parent::Project(p1);

    let before = availability.compute(parent).await.unwrap();
    assert_eq!(set_names(&before), vec!["Camera Kit", "Lighting Kit A"]);

    let after = availability.add_set(parent, seed.lighting_kit).await.unwrap();
    let (assigned, _) = ids(&after);
    assert_eq!(assigned, vec![seed.e1, seed.e2]);
    assert_eq!(set_names(&after), vec!["Camera Kit"]);

    // a third item of the set keeps it represented among the available items
    common::insert_equipment(&pool, seed.lighting_kit, seed.warehouse, "E3", "L-003").await;
    let with_spare = availability.compute(parent).await.unwrap();
    assert_eq!(set_names(&with_spare), vec!["Camera Kit", "Lighting Kit A"]);

    let removed = availability.remove_set(parent, "Lighting Kit A").await.unwrap();
    assert!(removed.assigned.is_empty());
    assert_eq!(removed.available.len(), 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_unknown_set_is_invalid_reference(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    common::assign(&pool, p1, seed.e1).await;
    let state = common::state(pool);

    let result = state
        .services
        .availability
        .remove_set(Parent::Project(p1), "No Such Kit")
        .await;
    assert!(matches!(result, Err(AppError::InvalidReference(_))));

    let unchanged = state.services.availability.compute(Parent::Project(p1)).await.unwrap();
    assert_eq!(ids(&unchanged).0, vec![seed.e1]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_parent_is_not_found(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let state = common::state(pool);
    let availability = &state.services.availability;

    let result = availability.compute(Parent::Project(4242)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let result = availability.add_equipment(Parent::Draft(4242), seed.e1).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_draft_copied_into_project(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    let draft = common::insert_draft(&pool, "Night kit").await;
    let state = common::state(pool);
    let availability = &state.services.availability;

    let in_draft = availability.add_set(Parent::Draft(draft), seed.lighting_kit).await.unwrap();
    assert_eq!(ids(&in_draft).0, vec![seed.e1, seed.e2]);

    availability.add_equipment(Parent::Project(p1), seed.e1).await.unwrap();
    let project = availability.add_draft_to_project(p1, draft).await.unwrap();
    assert_eq!(ids(&project).0, vec![seed.e1, seed.e2]);

    // the draft itself is untouched
    let draft_view = availability.compute(Parent::Draft(draft)).await.unwrap();
    assert_eq!(ids(&draft_view).0, vec![seed.e1, seed.e2]);

    let reset = availability.reset_project(p1).await.unwrap();
    assert!(reset.assigned.is_empty());
    assert_eq!(reset.available.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_available_in_set(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    common::assign(&pool, p1, seed.e1).await;
    let state = common::state(pool);

    let items = state
        .services
        .availability
        .available_in_set(Parent::Project(p1), seed.lighting_kit)
        .await
        .unwrap();
    let items: Vec<i32> = items.iter().map(|e| e.equipment_id).collect();
    assert_eq!(items, vec![seed.e2]);
}
