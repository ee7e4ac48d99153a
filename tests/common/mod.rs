#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use bakery_api::{AppState, router};
use entity::{baked_good, bakery, prelude::*};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue::Set, Database, DatabaseConnection, EntityTrait};
use serde_json::Value;
use tower::ServiceExt;

/// A freshly migrated in-memory database
pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        Self { db }
    }

    pub async fn create_bakery(&self, name: &str) -> i32 {
        let bakery = bakery::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        };
        Bakery::insert(bakery)
            .exec(&self.db)
            .await
            .unwrap()
            .last_insert_id
    }

    pub async fn create_baked_good(&self, name: &str, price: f64, bakery_id: Option<i32>) -> i32 {
        let baked_good = baked_good::ActiveModel {
            name: Set(name.to_owned()),
            price: Set(price),
            bakery_id: Set(bakery_id),
            ..Default::default()
        };
        BakedGood::insert(baked_good)
            .exec(&self.db)
            .await
            .unwrap()
            .last_insert_id
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        get(AppState::new(self.db.clone()), uri).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", self.body))
    }
}

pub async fn get(state: AppState, uri: &str) -> TestResponse {
    let response = router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
