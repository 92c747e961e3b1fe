use axum::{extract::FromRequestParts, http::StatusCode, http::request::Parts};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tower_sessions::Session;

use crate::constants::*;
use crate::models::AccountCreated;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Aurora,
    RetroNeon,
    Sunset,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Aurora, Theme::RetroNeon, Theme::Sunset];

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Aurora => "Aurora Borealis",
            Theme::RetroNeon => "Retro Neon Wave",
            Theme::Sunset => "Sunset Beach",
        }
    }
}

pub fn greeting_for_hour(hour: u8) -> &'static str {
    if hour < 12 {
        "Good morning, Money Maestro! ☀️"
    } else if hour < 18 {
        "Good afternoon, Savvy Spender! 🌈"
    } else {
        "Good evening, Financial Wizard! 🌙"
    }
}

pub fn greeting() -> &'static str {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    greeting_for_hour(now.hour())
}

/// Per-browser state: the logged-in user, the selected theme and the
/// one-shot "account created" banner. Lives until logout clears it.
pub struct SessionContext {
    session: Session,
}

type SessionResult<T> = Result<T, (StatusCode, String)>;

/// Logs the session-store failure and reports a generic message.
pub fn session_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!(error = %e, "session store failure");
    (StatusCode::INTERNAL_SERVER_ERROR, ERR_SESSION.to_string())
}

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn current_user(&self) -> SessionResult<Option<String>> {
        self.session
            .get(SESSION_KEY_USERNAME)
            .await
            .map_err(session_error)
    }

    pub async fn require_user(&self) -> SessionResult<String> {
        self.current_user()
            .await?
            .ok_or_else(|| (StatusCode::UNAUTHORIZED, ERR_UNAUTHORIZED.to_string()))
    }

    /// Binds the session to `username`, issuing a fresh session id.
    pub async fn log_in(&self, username: &str) -> SessionResult<()> {
        self.session.cycle_id().await.map_err(session_error)?;
        self.session
            .insert(SESSION_KEY_USERNAME, username)
            .await
            .map_err(session_error)
    }

    pub async fn log_out(&self) -> SessionResult<()> {
        self.session.flush().await.map_err(session_error)
    }

    pub async fn theme(&self) -> SessionResult<Theme> {
        Ok(self
            .session
            .get::<Theme>(SESSION_KEY_THEME)
            .await
            .map_err(session_error)?
            .unwrap_or_default())
    }

    pub async fn set_theme(&self, theme: Theme) -> SessionResult<()> {
        self.session
            .insert(SESSION_KEY_THEME, theme)
            .await
            .map_err(session_error)
    }

    pub async fn set_account_created(&self, created: &AccountCreated) -> SessionResult<()> {
        self.session
            .insert(SESSION_KEY_ACCOUNT_CREATED, created)
            .await
            .map_err(session_error)
    }

    /// Returns the pending banner and clears it.
    pub async fn take_account_created(&self) -> SessionResult<Option<AccountCreated>> {
        self.session
            .remove(SESSION_KEY_ACCOUNT_CREATED)
            .await
            .map_err(session_error)
    }
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(status, msg)| (status, msg.to_string()))?;
        Ok(Self::new(session))
    }
}
