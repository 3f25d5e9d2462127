//! Double-booking detection against a real database

mod common;

use sqlx::PgPool;

use gear_tracker::AppError;

#[sqlx::test(migrations = "./migrations")]
async fn test_shared_item_in_overlapping_project(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    let p2 = common::insert_project(&pool, "P2", "2024-06-05", "2024-06-15", false).await;
    common::assign(&pool, p1, seed.e1).await;
    common::assign(&pool, p1, seed.e2).await;
    common::assign(&pool, p2, seed.e1).await;
    let state = common::state(pool);
    let conflicts = &state.services.conflicts;

    let found = conflicts.conflicting_equipment(p1).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].equipment_id, seed.e1);
    assert_eq!(found[0].equipment_set_name, "Lighting Kit A");
    assert_eq!(found[0].project_id, p2);
    assert_eq!(found[0].project_name, "P2");

    // symmetric from the other side
    let reverse = conflicts.conflicting_equipment(p2).await.unwrap();
    assert_eq!(reverse.len(), 1);
    assert_eq!(reverse[0].equipment_id, seed.e1);
    assert_eq!(reverse[0].project_id, p1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_touching_dates_overlap(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-01-01", "2024-01-10", false).await;
    let touching = common::insert_project(&pool, "Touching", "2024-01-10", "2024-01-20", false).await;
    let adjacent = common::insert_project(&pool, "Adjacent", "2024-01-11", "2024-01-20", false).await;
    common::assign(&pool, p1, seed.camera).await;
    common::assign(&pool, touching, seed.camera).await;
    common::assign(&pool, adjacent, seed.camera).await;
    let state = common::state(pool);

    let found = state.services.conflicts.conflicting_equipment(p1).await.unwrap();
    let projects: Vec<i32> = found.iter().map(|c| c.project_id).collect();
    assert_eq!(projects, vec![touching]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_inverted_counterpart_uses_stored_dates(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let backwards = common::insert_project(&pool, "Backwards", "2024-02-10", "2024-02-01", false).await;
    let spanning = common::insert_project(&pool, "Spanning", "2024-01-25", "2024-02-15", false).await;
    let inside = common::insert_project(&pool, "Inside", "2024-02-03", "2024-02-05", false).await;
    for project in [backwards, spanning, inside] {
        common::assign(&pool, project, seed.camera).await;
    }
    let state = common::state(pool);
    let conflicts = &state.services.conflicts;

    // start and end are compared as stored, nothing is swapped
    let found = conflicts.conflicting_equipment(backwards).await.unwrap();
    let projects: Vec<i32> = found.iter().map(|c| c.project_id).collect();
    assert_eq!(projects, vec![spanning]);

    let from_inside = conflicts.conflicting_equipment(inside).await.unwrap();
    let projects: Vec<i32> = from_inside.iter().map(|c| c.project_id).collect();
    assert_eq!(projects, vec![spanning]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_archived_counterparts_are_ignored(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    let old = common::insert_project(&pool, "Old", "2024-06-01", "2024-06-10", true).await;
    common::assign(&pool, p1, seed.e1).await;
    common::assign(&pool, old, seed.e1).await;
    let state = common::state(pool);
    let conflicts = &state.services.conflicts;

    assert!(conflicts.conflicting_equipment(p1).await.unwrap().is_empty());
    assert!(conflicts.conflicting_projects().await.unwrap().is_empty());

    // the subject's own archived flag is not checked
    let from_archived = conflicts.conflicting_equipment(old).await.unwrap();
    assert_eq!(from_archived.len(), 1);
    assert_eq!(from_archived[0].project_id, p1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_conflicting_projects_counts(pool: PgPool) {
    let seed = common::seed(&pool).await;
    let p1 = common::insert_project(&pool, "P1", "2024-06-01", "2024-06-10", false).await;
    let p2 = common::insert_project(&pool, "P2", "2024-06-05", "2024-06-15", false).await;
    let quiet = common::insert_project(&pool, "Quiet", "2024-06-01", "2024-06-30", false).await;
    for id in [seed.e1, seed.e2] {
        common::assign(&pool, p1, id).await;
        common::assign(&pool, p2, id).await;
    }
    common::assign(&pool, quiet, seed.camera).await;
    let state = common::state(pool);

    let projects = state.services.conflicts.conflicting_projects().await.unwrap();
    let summary: Vec<(i32, i32)> = projects
        .iter()
        .map(|p| (p.project_id, p.conflicting_equipment_count))
        .collect();
    assert_eq!(summary, vec![(p1, 2), (p2, 2)]);
    assert_eq!(projects[0].shooting_start_date, common::date("2024-06-01"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_project(pool: PgPool) {
    common::seed(&pool).await;
    let state = common::state(pool);

    let result = state.services.conflicts.conflicting_equipment(999).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
