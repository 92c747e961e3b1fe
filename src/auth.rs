use axum::{Json, extract::State, http::StatusCode};

use crate::AppState;
use crate::constants::*;
use crate::error::{StoreError, store_error};
use crate::models::{
    AccountCreated, HintResponse, LoginPayload, PublicUser, RecoverPayload, RegisterPayload,
};
use crate::session::{SessionContext, greeting};

pub async fn register(
    State(state): State<AppState>,
    session: SessionContext,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<AccountCreated>), (StatusCode, String)> {
    let created = state
        .accounts
        .register(&payload.username, &payload.password, &payload.hint)
        .await
        .map_err(|e| {
            tracing::warn!(username = %payload.username, error = %e, "registration rejected");
            store_error(e)
        })?;

    session.set_account_created(&created).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn login(
    State(state): State<AppState>,
    session: SessionContext,
    Json(payload): Json<LoginPayload>,
) -> Result<(StatusCode, Json<PublicUser>), (StatusCode, String)> {
    let is_valid = state
        .accounts
        .authenticate(&payload.username, &payload.password)
        .await
        .map_err(store_error)?;

    // Same response for unknown user and wrong password
    if !is_valid {
        tracing::info!(username = %payload.username, "login rejected");
        return Err(store_error(StoreError::AuthFailure));
    }

    session.log_in(&payload.username).await?;
    tracing::info!(username = %payload.username, "user logged in");

    Ok((
        StatusCode::OK,
        Json(PublicUser {
            username: payload.username,
            greeting: greeting().to_string(),
        }),
    ))
}

pub async fn me(session: SessionContext) -> Result<(StatusCode, Json<PublicUser>), (StatusCode, String)> {
    let username = session.require_user().await?;
    Ok((
        StatusCode::OK,
        Json(PublicUser {
            username,
            greeting: greeting().to_string(),
        }),
    ))
}

pub async fn logout(session: SessionContext) -> Result<StatusCode, (StatusCode, String)> {
    session.log_out().await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn recover_hint(
    State(state): State<AppState>,
    Json(payload): Json<RecoverPayload>,
) -> Result<(StatusCode, Json<HintResponse>), (StatusCode, String)> {
    let hint = state
        .accounts
        .recover_hint(&payload.username)
        .await
        .map_err(store_error)?;

    match hint {
        Some(hint) => Ok((StatusCode::OK, Json(HintResponse { hint }))),
        None => Err(store_error(StoreError::NotFound(ERR_NO_HINT.to_string()))),
    }
}
