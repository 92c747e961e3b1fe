#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use money_matters::{
    AppState, accounts::AccountStore, app, expenses::ExpenseStore, models::ExpenseRecord,
    session_layer,
};
use serde_json::Value;
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

pub const TEST_SESSION_SECRET: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Fresh account + expense stores in an isolated temporary directory.
/// The returned `TempDir` must outlive the stores.
pub async fn setup_test_environment() -> (AccountStore, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let expenses = ExpenseStore::new(temp_dir.path());
    let accounts = AccountStore::init(expenses)
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize account store: {}", e));

    (accounts, temp_dir)
}

pub async fn setup_test_app() -> (TestClient, AccountStore, TempDir) {
    let (accounts, temp_dir) = setup_test_environment().await;
    let sessions = session_layer(TEST_SESSION_SECRET.as_bytes())
        .expect("Failed to build session layer");
    let router = app(
        AppState {
            accounts: accounts.clone(),
        },
        sessions,
    );

    (TestClient::new(router), accounts, temp_dir)
}

pub fn expense(amount: f64, category: &str, date: &str) -> ExpenseRecord {
    ExpenseRecord {
        amount,
        category: category.to_string(),
        date: date.to_string(),
    }
}

/// Drives the router in-process, carrying the session cookie between calls
/// the way a browser would.
pub struct TestClient {
    router: Router,
    cookie: Option<String>,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            cookie: None,
        }
    }

    /// Same server, no cookie: a second browser.
    pub fn fresh_browser(&self) -> Self {
        Self::new(self.router.clone())
    }

    pub async fn request(
        &mut self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond");

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .expect("Set-Cookie header is not ASCII")
                .split(';')
                .next()
                .unwrap_or_default()
                .to_string();
            self.cookie = Some(pair);
        }

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let value = serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

        (status, value)
    }

    pub async fn get(&mut self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&mut self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put(&mut self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, path, Some(body)).await
    }
}
