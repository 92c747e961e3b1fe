use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::session::Theme;

/// Stored credential record, keyed by username in the accounts file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub password: String,
    #[serde(default)]
    pub hint: String,
}

pub type Accounts = BTreeMap<String, Account>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub amount: f64,
    pub category: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

#[derive(Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RecoverPayload {
    pub username: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountCreated {
    pub username: String,
    pub hint: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PublicUser {
    pub username: String,
    pub greeting: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HintResponse {
    pub hint: String,
}

#[derive(Deserialize)]
pub struct CreateExpensePayload {
    pub amount: f64,
    pub category: String,
    /// Defaults to today when omitted.
    pub date: Option<String>,
}

/// An expense as listed to the page, decorated with its category icon.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExpenseView {
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub label: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Summary {
    pub categories: Vec<CategoryTotal>,
    pub total: f64,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryInfo {
    pub name: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ThemeInfo {
    pub key: Theme,
    pub name: String,
}

#[derive(Deserialize)]
pub struct ThemePayload {
    pub theme: Theme,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SessionView {
    pub username: Option<String>,
    pub theme: Theme,
    pub account_created: Option<AccountCreated>,
}
