//! Shared fixtures for the integration tests

#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use gear_tracker::{api, config::AppConfig, repository::Repository, AppState};

pub const CHIEF_ENGINEER: &str = "Anna Petrova";

/// Ids of the rows inserted by [`seed`]
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    pub lighting_kit: i32,
    pub camera_kit: i32,
    pub e1: i32,
    pub e2: i32,
    pub camera: i32,
    pub warehouse: i32,
    pub chief_engineer: i32,
}

pub fn state(pool: PgPool) -> AppState {
    AppState::new(AppConfig::default(), Repository::new(pool))
}

pub fn app(pool: PgPool) -> Router {
    api::router(state(pool))
}

pub fn date(value: &str) -> NaiveDate {
    value.parse().expect("valid date")
}

/// "Lighting Kit A" (E1, E2) and "Camera Kit" (one camera), one warehouse
/// and one chief engineer
pub async fn seed(pool: &PgPool) -> Seed {
    let lighting: i32 =
        sqlx::query_scalar("INSERT INTO set_types (set_type_name) VALUES ('Lighting') RETURNING set_type_id")
            .fetch_one(pool)
            .await
            .unwrap();
    let camera_type: i32 =
        sqlx::query_scalar("INSERT INTO set_types (set_type_name) VALUES ('Camera') RETURNING set_type_id")
            .fetch_one(pool)
            .await
            .unwrap();

    let warehouse: i32 = sqlx::query_scalar(
        "INSERT INTO warehouses (warehouse_name, warehouse_adress) VALUES ('Main', 'Studio 1') RETURNING warehouse_id",
    )
    .fetch_one(pool)
    .await
    .unwrap();

    let lighting_kit = insert_set(pool, "Lighting Kit A", lighting).await;
    let camera_kit = insert_set(pool, "Camera Kit", camera_type).await;

    let e1 = insert_equipment(pool, lighting_kit, warehouse, "E1", "L-001").await;
    let e2 = insert_equipment(pool, lighting_kit, warehouse, "E2", "L-002").await;
    let camera = insert_equipment(pool, camera_kit, warehouse, "Alexa Mini", "C-001").await;

    let chief_engineer: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO users (first_name, last_name, name, email, password)
        VALUES ('Anna', 'Petrova', $1, 'anna@example.com', 'not-a-hash')
        RETURNING id
        "#,
    )
    .bind(CHIEF_ENGINEER)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO project_types (project_type_name) VALUES ('Feature')")
        .execute(pool)
        .await
        .unwrap();

    Seed {
        lighting_kit,
        camera_kit,
        e1,
        e2,
        camera,
        warehouse,
        chief_engineer,
    }
}

pub async fn insert_set(pool: &PgPool, name: &str, set_type_id: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO equipment_sets (equipment_set_name, set_type_id) VALUES ($1, $2) RETURNING equipment_set_id",
    )
    .bind(name)
    .bind(set_type_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_equipment(pool: &PgPool, set_id: i32, warehouse_id: i32, name: &str, serial: &str) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO equipment (equipment_set_id, equipment_name, serial_number, storage_id)
        VALUES ($1, $2, $3, $4)
        RETURNING equipment_id
        "#,
    )
    .bind(set_id)
    .bind(name)
    .bind(serial)
    .bind(warehouse_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_project(pool: &PgPool, name: &str, start: &str, end: &str, archived: bool) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO projects (project_name, archived, shooting_start_date, shooting_end_date)
        VALUES ($1, $2, $3, $4)
        RETURNING project_id
        "#,
    )
    .bind(name)
    .bind(archived)
    .bind(date(start))
    .bind(date(end))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_draft(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO drafts (draft_name) VALUES ($1) RETURNING draft_id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn assign(pool: &PgPool, project_id: i32, equipment_id: i32) {
    sqlx::query("INSERT INTO equipment_in_project (project_id, equipment_id) VALUES ($1, $2)")
        .bind(project_id)
        .bind(equipment_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn assign_to_draft(pool: &PgPool, draft_id: i32, equipment_id: i32) {
    sqlx::query("INSERT INTO equipment_in_draft (draft_id, equipment_id) VALUES ($1, $2)")
        .bind(draft_id)
        .bind(equipment_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Run one request through the router, returning status and JSON body
/// (`Value::Null` for empty bodies)
pub async fn send(app: &Router, request: Request<Body>) -> (axum::http::StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}
