use axum::{Json, extract::State, http::StatusCode};

use crate::AppState;
use crate::categories::icon_for;
use crate::error::store_error;
use crate::expenses::{parse_date, summarize, today};
use crate::models::{CreateExpensePayload, ExpenseRecord, ExpenseView, Summary};
use crate::session::SessionContext;

pub fn to_view(record: ExpenseRecord) -> ExpenseView {
    ExpenseView {
        icon: icon_for(&record.category).to_string(),
        amount: record.amount,
        category: record.category,
        date: record.date,
    }
}

pub async fn create_expense(
    State(state): State<AppState>,
    session: SessionContext,
    Json(payload): Json<CreateExpensePayload>,
) -> Result<(StatusCode, Json<ExpenseView>), (StatusCode, String)> {
    let username = session.require_user().await?;

    let date = match payload.date.as_deref() {
        Some(value) if !value.trim().is_empty() => parse_date(value).map_err(store_error)?,
        _ => today(),
    };

    let record = state
        .accounts
        .expenses()
        .add(&username, payload.amount, &payload.category, date)
        .await
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(to_view(record))))
}

pub async fn get_expenses(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<(StatusCode, Json<Vec<ExpenseView>>), (StatusCode, String)> {
    let username = session.require_user().await?;

    let expenses = state
        .accounts
        .expenses()
        .load(&username)
        .await
        .map_err(store_error)?;

    Ok((
        StatusCode::OK,
        Json(expenses.into_iter().map(to_view).collect()),
    ))
}

pub async fn get_summary(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<(StatusCode, Json<Summary>), (StatusCode, String)> {
    let username = session.require_user().await?;

    let expenses = state
        .accounts
        .expenses()
        .load(&username)
        .await
        .map_err(store_error)?;

    Ok((StatusCode::OK, Json(summarize(&expenses))))
}
