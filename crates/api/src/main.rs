use std::sync::Arc;

use anyhow::Context;

use dashboard_infra::{DashboardConfig, DashboardDirectory, InMemoryDirectory, SeedData};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env().context("invalid configuration")?;
    dashboard_observability::init(config.log_format);
    config.log_defaults();

    let seed = SeedData::load(config.seed_path.as_deref()).context("failed to load seed data")?;
    let directory: Arc<dyn DashboardDirectory> = Arc::new(InMemoryDirectory::from_seed(seed));

    let app = dashboard_api::app::build_app(directory);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
