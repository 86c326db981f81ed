use anyhow::{Context, Result};
use product::{di::DependenciesInjectDeps, handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("product-service", config.dev_mode, config.enable_file_log);

    info!("🚀 Starting Product Service initialization...");

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(DependenciesInjectDeps::from_pool(db_pool.clone()));

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("HTTP server failed")?;

    db_pool.close().await;
    info!("✅ Product Service shutdown complete.");

    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
