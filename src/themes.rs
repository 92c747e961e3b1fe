use axum::{Json, http::StatusCode};

use crate::models::{SessionView, ThemeInfo, ThemePayload};
use crate::session::{SessionContext, Theme};

pub async fn list_themes() -> (StatusCode, Json<Vec<ThemeInfo>>) {
    let themes = Theme::ALL
        .into_iter()
        .map(|t| ThemeInfo {
            key: t,
            name: t.display_name().to_string(),
        })
        .collect();

    (StatusCode::OK, Json(themes))
}

/// Current session state. Reading it consumes the "account created" banner.
pub async fn get_session(
    session: SessionContext,
) -> Result<(StatusCode, Json<SessionView>), (StatusCode, String)> {
    let view = SessionView {
        username: session.current_user().await?,
        theme: session.theme().await?,
        account_created: session.take_account_created().await?,
    };
    Ok((StatusCode::OK, Json(view)))
}

pub async fn set_theme(
    session: SessionContext,
    Json(payload): Json<ThemePayload>,
) -> Result<(StatusCode, Json<SessionView>), (StatusCode, String)> {
    session.set_theme(payload.theme).await?;
    get_session(session).await
}
