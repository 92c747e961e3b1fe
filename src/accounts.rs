use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{Result, StoreError};
use crate::expenses::ExpenseStore;
use crate::models::{Account, AccountCreated, Accounts};
use crate::storage::{ensure_json_file, read_json, users_path, write_json};

/// Username → credential registry backed by a single JSON file.
#[derive(Clone)]
pub struct AccountStore {
    path: PathBuf,
    expenses: ExpenseStore,
    lock: Arc<Mutex<()>>,
}

impl AccountStore {
    /// Opens the registry in the expense store's data directory, creating an
    /// empty accounts file if none exists.
    pub async fn init(expenses: ExpenseStore) -> Result<Self> {
        tokio::fs::create_dir_all(expenses.data_dir()).await?;
        let path = users_path(expenses.data_dir());
        if ensure_json_file(&path, &Accounts::new()).await? {
            tracing::info!(path = %path.display(), "initialized empty accounts file");
        }
        Ok(Self {
            path,
            expenses,
            lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expenses(&self) -> &ExpenseStore {
        &self.expenses
    }

    pub async fn load(&self) -> Result<Accounts> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    /// Replaces the whole registry.
    pub async fn save(&self, accounts: &Accounts) -> Result<()> {
        let _guard = self.lock.lock().await;
        write_json(&self.path, accounts).await
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
        hint: &str,
    ) -> Result<AccountCreated> {
        let _guard = self.lock.lock().await;
        let mut accounts = self.load_unlocked().await?;

        if accounts.contains_key(username) {
            return Err(StoreError::AlreadyExists(
                "Username already exists".to_string(),
            ));
        }
        if username.is_empty() || password.is_empty() {
            return Err(StoreError::InvalidInput(
                "Please enter both a username and password".to_string(),
            ));
        }

        accounts.insert(
            username.to_string(),
            Account {
                password: password.to_string(),
                hint: hint.to_string(),
            },
        );
        write_json(&self.path, &accounts).await?;
        self.expenses.save(username, &[]).await?;

        tracing::info!(username, "account registered");
        Ok(AccountCreated {
            username: username.to_string(),
            hint: hint.to_string(),
        })
    }

    /// Exact comparison against the stored password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let accounts = self.load().await?;
        Ok(accounts
            .get(username)
            .is_some_and(|account| account.password == password))
    }

    /// The stored hint, or `None` for an unknown user or an empty hint.
    pub async fn recover_hint(&self, username: &str) -> Result<Option<String>> {
        let accounts = self.load().await?;
        Ok(accounts
            .get(username)
            .map(|account| account.hint.clone())
            .filter(|hint| !hint.is_empty()))
    }

    async fn load_unlocked(&self) -> Result<Accounts> {
        read_json(&self.path).await
    }
}
