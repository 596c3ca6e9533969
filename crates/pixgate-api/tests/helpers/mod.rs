//! Test helpers: build AppState and router for integration tests.
//!
//! Storage and the secret provider are in-memory doubles that count calls,
//! so no AWS access is needed.
#![allow(dead_code)]

pub mod auth;
pub mod fixtures;
pub mod storage;

use axum_test::TestServer;
use pixgate_api::setup::routes;
use pixgate_api::state::AppState;
use pixgate_core::Config;
use std::collections::HashMap;
use std::sync::Arc;

use self::auth::CountingSecretProvider;
use self::storage::MemoryStorage;

/// Test application: server plus handles on the collaborators.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MemoryStorage>,
    pub secrets: Arc<CountingSecretProvider>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(&[])
}

/// Setup a test app, overriding configuration variables.
pub fn setup_test_app_with(vars: &[(&str, &str)]) -> TestApp {
    setup_test_app_with_storage(vars, Arc::new(MemoryStorage::new()))
}

pub fn setup_test_app_with_storage(vars: &[(&str, &str)], storage: Arc<MemoryStorage>) -> TestApp {
    let config = create_test_config(vars);
    let secrets = Arc::new(CountingSecretProvider::new(auth::TEST_SECRET));

    let state = Arc::new(AppState::new(storage.clone(), secrets.clone()));
    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        storage,
        secrets,
    }
}

fn create_test_config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = [
        ("SECRET_SOURCE", "env"),
        ("JWT_SECRET", auth::TEST_SECRET),
        ("STORAGE_BACKEND", "local"),
        ("LOCAL_STORAGE_PATH", "/tmp/pixgate-test"),
        ("LOCAL_STORAGE_BASE_URL", "http://localhost:4000/media"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in overrides {
        vars.insert(k.to_string(), v.to_string());
    }

    Config::from_lookup(|key| vars.get(key).cloned()).expect("Failed to build test config")
}
