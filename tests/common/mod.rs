use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use dukaan_api::config::{Config, EmailConfig};
use dukaan_api::db::{Document, DocumentStore, MemoryStore, StoreError};
use dukaan_api::email::{EmailError, EmailSender, OutgoingEmail};

pub const SENDER: &str = "onboarding@resend.dev";

/// A running test server backed by an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body, return (body, status).
    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn submit_contact(&self, body: &Value) -> (Value, StatusCode) {
        self.post_json("/contact", body).await
    }

    pub async fn subscribe(&self, email: &str) -> (Value, StatusCode) {
        self.post_json("/newsletter", &json!({ "email": email })).await
    }

    pub fn contacts(&self) -> Vec<Document> {
        self.store.documents("contacts")
    }

    pub fn subscriptions(&self) -> Vec<Document> {
        self.store.documents("newsletter")
    }
}

/// Records every message instead of delivering it.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Fails every delivery, like an unreachable provider.
pub struct FailingMailer;

#[async_trait]
impl EmailSender for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), EmailError> {
        Err(EmailError::from("provider unavailable"))
    }
}

/// Rejects every operation, like an unreachable database.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn find_one(
        &self,
        _collection: &str,
        _field: &str,
        _value: &str,
    ) -> Result<Option<Document>, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

/// Misses every lookup and fails every insert, like a store that lost a
/// uniqueness race or dropped between the two calls.
pub struct InsertFailingStore {
    pub error: fn() -> StoreError,
}

#[async_trait]
impl DocumentStore for InsertFailingStore {
    async fn insert_one(&self, _collection: &str, _document: Document) -> Result<(), StoreError> {
        Err((self.error)())
    }

    async fn find_one(
        &self,
        _collection: &str,
        _field: &str,
        _value: &str,
    ) -> Result<Option<Document>, StoreError> {
        Ok(None)
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_url: "mongodb://unused".to_string(),
        db_name: "makemydukaan_test".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 16 * 1024,
        log_level: "warn".to_string(),
        newsletter_unique_index: false,
        email: EmailConfig {
            sender: SENDER.to_string(),
            notify: SENDER.to_string(),
            transport: None,
        },
    }
}

/// Spawn the app with a fresh in-memory store and a recording mailer.
pub async fn spawn_app() -> TestApp {
    spawn_with_store(MemoryStore::new()).await
}

pub async fn spawn_with_store(store: MemoryStore) -> TestApp {
    let store = Arc::new(store);
    let mailer = Arc::new(RecordingMailer::default());

    let addr = serve(store.clone(), Some(mailer.clone() as Arc<dyn EmailSender>)).await;

    TestApp {
        addr,
        store,
        mailer,
        client: Client::new(),
    }
}

/// Bind the app with arbitrary collaborators to a random port.
pub async fn serve(
    store: Arc<dyn DocumentStore>,
    mailer: Option<Arc<dyn EmailSender>>,
) -> SocketAddr {
    let app = dukaan_api::build_app(store, mailer, test_config());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

pub fn valid_contact() -> Value {
    json!({
        "name": "Test User",
        "email": "test@example.com",
        "phone": "+91 98765 43210",
        "business_type": "Retail / Shop",
        "budget": "15000-25000",
        "message": ""
    })
}
