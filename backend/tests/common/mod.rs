#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::Request,
    response::Response,
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;
use trail_api::{create_router, database::Database, AppState};

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Temporary SQLite store. Keep it alive for as long as the router is used.
pub struct TestStore {
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestStore {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let options = SqliteConnectOptions::new()
            .filename(dir.path().join("trails.db"))
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .expect("open test database");
        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .expect("create schema");

        Self { pool, _dir: dir }
    }

    pub fn app(&self) -> Router {
        let db = Database::from_pool(self.pool.clone());
        create_router(AppState { db: Arc::new(db) })
    }

    pub async fn insert_trail(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
        created_at: &str,
    ) {
        sqlx::query(
            "INSERT INTO trail_metadata (id, name, description, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .expect("insert trail");
    }

    pub async fn insert_coordinate(
        &self,
        trail_id: i64,
        sequence_order: i64,
        (latitude, longitude): (f64, f64),
        name: &str,
        description: Option<&str>,
    ) {
        sqlx::query(
            r#"
            INSERT INTO trail_coordinates
                (trail_id, sequence_order, latitude, longitude, name, description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trail_id)
        .bind(sequence_order)
        .bind(latitude)
        .bind(longitude)
        .bind(name)
        .bind(description)
        .execute(&self.pool)
        .await
        .expect("insert coordinate");
    }

    /// Trail 1 and its two waypoints, inserted out of order.
    pub async fn seed_siyuan_pass(&self) {
        self.insert_trail(1, "Siyuan Pass", Some("desc"), "2024-01-01 08:00:00")
            .await;
        self.insert_coordinate(1, 2, (24.31, 121.31), "End", Some("summit"))
            .await;
        self.insert_coordinate(1, 1, (24.3, 121.3), "Start", None)
            .await;
    }
}

pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Bytes {
    to_bytes(response.into_body(), 1024 * 1024).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
