#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use familylegacy_core::ProfileRepository;
use familylegacy_domain::{Config, Profile, Role, StorageBackend};
use familylegacy_infra::{DbManager, SqliteProfileRepository};
use familylegacy_lib::{router, AppContext};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const USER_HEADER: &str = "x-user-id";

/// Router over a fresh SQLite database.
pub struct TestApp {
    pub router: Router,
    pub ctx: Arc<AppContext>,
    /// Keep temporary directory alive for the lifetime of the app.
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_staff(&[]).await
    }

    /// Seed staff profiles directly in storage; staff roles cannot onboard
    /// through the API.
    pub async fn with_staff(staff: &[(&str, Role)]) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary database directory");
        let db_path = temp_dir.path().join("familylegacy.db");

        {
            let db = Arc::new(DbManager::open(&db_path, 2).expect("failed to open seed database"));
            let repo = SqliteProfileRepository::new(db);
            for (user_id, role) in staff {
                repo.create(Profile::new(*user_id, *role, Utc::now()))
                    .await
                    .expect("failed to seed staff profile");
            }
        }

        let mut config = Config::default();
        config.database.backend = StorageBackend::Sqlite;
        config.database.path = db_path.to_string_lossy().into_owned();
        config.database.pool_size = 4;

        let ctx = Arc::new(AppContext::new(config).expect("failed to create app context"));
        Self { router: router(Arc::clone(&ctx)), ctx, _temp_dir: temp_dir }
    }

    /// Send a request as `user` (no identity header when `None`).
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(user) = user {
            builder = builder.header(USER_HEADER, user);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("failed to build request");

        let response =
            self.router.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, json)
    }

    pub async fn get(&self, path: &str, user: &str) -> (StatusCode, Value) {
        self.send(Method::GET, path, Some(user), None).await
    }

    pub async fn post(&self, path: &str, user: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, path, Some(user), Some(body)).await
    }

    pub async fn patch(&self, path: &str, user: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, path, Some(user), Some(body)).await
    }

    /// Onboard `user` with `role` and assert it succeeded.
    pub async fn onboard(&self, user: &str, role: &str) -> Value {
        let (status, body) =
            self.post("/api/profile", user, serde_json::json!({ "role": role })).await;
        assert_eq!(status, StatusCode::CREATED, "onboarding failed: {body}");
        body
    }
}
