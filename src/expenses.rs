use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use tokio::sync::Mutex;

use crate::categories::{label_for, validate_category_name};
use crate::error::{Result, StoreError};
use crate::models::{CategoryTotal, ExpenseRecord, Summary};
use crate::storage::{ensure_json_file, expenses_path, read_json, write_json};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Per-user expense lists, one JSON file per username.
#[derive(Clone)]
pub struct ExpenseStore {
    data_dir: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Arc<Mutex<()>>,
}

impl ExpenseStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, username: &str) -> PathBuf {
        expenses_path(&self.data_dir, username)
    }

    /// Returns the user's expenses in insertion order, creating an empty
    /// list on first access.
    pub async fn load(&self, username: &str) -> Result<Vec<ExpenseRecord>> {
        let _guard = self.lock.lock().await;
        self.load_unlocked(username).await
    }

    pub async fn save(&self, username: &str, expenses: &[ExpenseRecord]) -> Result<()> {
        let _guard = self.lock.lock().await;
        write_json(&self.path(username), expenses).await
    }

    /// Appends one expense and persists the whole list.
    pub async fn add(
        &self,
        username: &str,
        amount: f64,
        category: &str,
        date: Date,
    ) -> Result<ExpenseRecord> {
        validate_amount(amount)?;
        validate_category_name(category)?;

        let record = ExpenseRecord {
            amount,
            category: category.to_string(),
            date: format_date(date)?,
        };

        let _guard = self.lock.lock().await;
        let mut expenses = self.load_unlocked(username).await?;
        expenses.push(record.clone());
        write_json(&self.path(username), &expenses).await?;

        tracing::info!(
            username,
            category = %record.category,
            amount = record.amount,
            count = expenses.len(),
            "expense added"
        );
        Ok(record)
    }

    async fn load_unlocked(&self, username: &str) -> Result<Vec<ExpenseRecord>> {
        let path = self.path(username);
        ensure_json_file(&path, &Vec::<ExpenseRecord>::new()).await?;
        read_json(&path).await
    }
}

pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(StoreError::InvalidInput(
            "Amount must be a finite number".to_string(),
        ));
    }
    if amount < 0.0 {
        return Err(StoreError::InvalidInput(
            "Amount cannot be negative".to_string(),
        ));
    }
    Ok(())
}

pub fn parse_date(value: &str) -> Result<Date> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|_| {
        StoreError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

pub fn format_date(date: Date) -> Result<String> {
    date.format(DATE_FORMAT)
        .map_err(|e| StoreError::InvalidInput(format!("Unformattable date: {}", e)))
}

pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Groups expenses by category, summing amounts. Categories come out in
/// name order.
pub fn summarize(expenses: &[ExpenseRecord]) -> Summary {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
    }

    let categories = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            label: label_for(category),
            amount,
        })
        .collect();

    Summary {
        categories,
        total: expenses.iter().map(|e| e.amount).sum(),
        count: expenses.len(),
    }
}
