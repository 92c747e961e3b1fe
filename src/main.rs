use anyhow::Context;
use tracing_subscriber::EnvFilter;

use money_matters::{
    AppState,
    accounts::AccountStore,
    app,
    config::Config,
    constants::DEFAULT_LOG_FILTER,
    expenses::ExpenseStore,
    session_layer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load environment variables
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("invalid configuration")?;

    let expenses = ExpenseStore::new(&config.data_path);
    let accounts = AccountStore::init(expenses)
        .await
        .context("failed to initialize account store")?;

    let sessions = session_layer(config.session_secret.as_bytes())?;
    let router = app(AppState { accounts }, sessions);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    tracing::info!(address = %bind_address, data_path = %config.data_path, "server running");

    axum::serve(listener, router).await?;
    Ok(())
}
