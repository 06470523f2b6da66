//! Test helpers for names-service integration tests.

#![allow(dead_code)]

use names_service::config::NamesConfig;
use names_service::services::{InMemoryNameStore, NameStore};
use names_service::startup::Application;
use names_service::{build_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryNameStore>,
    client: reqwest::Client,
}

impl TestApp {
    /// Spawn the full HTTP server on a random port, backed by an in-memory store.
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryNameStore::new());
        let config = NamesConfig::local("mongodb://unused", "names_test");

        let app = Application::build_with_store(config, store.clone() as Arc<dyn NameStore>)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();

        // Wait for the server to accept connections
        for _ in 0..50 {
            if client
                .get(format!("{}/health-check", address))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn add_name(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url("/add-name"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Router over a fresh in-memory store, for `oneshot` tests.
pub fn test_router() -> (axum::Router, Arc<InMemoryNameStore>) {
    test_router_with(NamesConfig::local("mongodb://unused", "names_test"))
}

pub fn test_router_with(config: NamesConfig) -> (axum::Router, Arc<InMemoryNameStore>) {
    let store = Arc::new(InMemoryNameStore::new());
    let state = AppState::new(config, store.clone() as Arc<dyn NameStore>);
    (build_router(state), store)
}

pub fn ar_rahman() -> Value {
    json!({
        "number": 1,
        "arabicName": "الرحمن",
        "transliteration": "Ar-Rahman",
        "translation": "The Merciful"
    })
}

pub fn ar_rahim() -> Value {
    json!({
        "number": 2,
        "arabicName": "الرحيم",
        "transliteration": "Ar-Rahim",
        "translation": "The Compassionate",
        "briefMeaning": "He who acts with extreme kindness"
    })
}

pub fn al_malik() -> Value {
    json!({
        "number": 3,
        "arabicName": "الملك",
        "transliteration": "Al-Malik",
        "translation": "The King"
    })
}
