//! One-shot seed utility
//!
//! Wipes the task store and inserts the sample fixtures. Refuses to touch a
//! production store (`TASKS_ENV=production`) unless `TASKS_SEED_CONFIRM` is set.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use air_core::seed;
use air_core::task::FileTaskStore;
use air_core::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_seeder=info,air_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    seed::ensure_seed_allowed(&config)?;

    let path = config.tasks_path();
    let store = FileTaskStore::new(&path)
        .await
        .with_context(|| format!("Failed to open task store at {:?}", path))?;
    tracing::info!("Store opened for seeding: {:?}", store.path());

    let report = seed::reset(&store)
        .await
        .context("Error while seeding tasks")?;

    tracing::info!(
        "Seeded {} tasks (replaced {})",
        report.inserted.len(),
        report.removed
    );
    Ok(())
}
