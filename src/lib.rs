use axum::{
    Router,
    response::Html,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_sessions::{
    Expiry, MemoryStore, SessionManagerLayer, cookie::Key, service::SignedCookie,
};

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod config;
pub mod constants;
pub mod error;
pub mod expenses;
pub mod models;
pub mod records;
pub mod session;
pub mod storage;
pub mod themes;

use accounts::AccountStore;
use config::ConfigError;
use constants::*;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountStore,
}

pub type Sessions = SessionManagerLayer<MemoryStore, SignedCookie>;

pub fn session_layer(secret: &[u8]) -> Result<Sessions, ConfigError> {
    let key = Key::try_from(secret)
        .map_err(|e| ConfigError::InvalidSessionSecret(e.to_string()))?;

    Ok(SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_name(SESSION_NAME)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(SESSION_EXPIRY_DAYS)))
        .with_signed(key))
}

pub fn app(state: AppState, sessions: Sessions) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/auth/recover", post(auth::recover_hint))
        .route("/session", get(themes::get_session))
        .route("/session/theme", put(themes::set_theme))
        .route("/themes", get(themes::list_themes))
        .route("/categories", get(categories::list_categories))
        .route(
            "/expenses",
            post(records::create_expense).get(records::get_expenses),
        )
        .route("/expenses/summary", get(records::get_summary))
        .layer(sessions)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
