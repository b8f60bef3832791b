//! Sample task fixtures and the destructive reset that installs them

use tracing::{info, warn};

use crate::config::Config;
use crate::task::{NewTask, Task, TaskPriority, TaskRepository, TaskStatus};
use crate::{Error, Result};

/// Outcome of a seed run
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub removed: usize,
    pub inserted: Vec<Task>,
}

/// The fixed sample records
pub fn fixture_tasks() -> Vec<NewTask> {
    vec![
        NewTask::new("Complete Backend API", TaskPriority::High)
            .with_description("Finish the CRUD operations for the tasks API")
            .with_category("Work")
            .with_progress(50)
            .with_schedule("2025-01-15", "10:00 AM")
            .with_image("assets/images/task1.jpg")
            .with_status(TaskStatus::InProgress),
        NewTask::new("UI Design Update", TaskPriority::Medium)
            .with_description("Revamp the existing UI components")
            .with_category("Design")
            .with_progress(30)
            .with_schedule("2025-01-20", "02:00 PM")
            .with_image("assets/images/task2.jpg")
            .with_status(TaskStatus::Pending),
        NewTask::new("Testing and Bug Fixes", TaskPriority::Low)
            .with_description("Conduct thorough testing and fix reported bugs")
            .with_category("QA")
            .with_progress(70)
            .with_schedule("2025-01-22", "01:00 PM")
            .with_image("assets/images/task3.jpg")
            .with_status(TaskStatus::Completed),
    ]
}

/// Refuse to wipe a production store unless the operator opted in
pub fn ensure_seed_allowed(config: &Config) -> Result<()> {
    if !config.is_production() {
        return Ok(());
    }
    if config.seed_confirmed {
        warn!("Seeding production store at {:?} (TASKS_SEED_CONFIRM set)", config.data_dir);
        return Ok(());
    }
    Err(Error::SeedRefused(format!(
        "environment '{}' is production; set TASKS_SEED_CONFIRM=true to wipe {:?}",
        config.environment, config.data_dir
    )))
}

/// Replace every task in `store` with the fixtures.
///
/// The swap is one store write, so a failure leaves the previous tasks intact.
pub async fn reset<R: TaskRepository + ?Sized>(store: &R) -> Result<SeedReport> {
    let (removed, inserted) = store.replace_all(fixture_tasks()).await?;
    info!("Replaced {} existing tasks with {} samples", removed, inserted.len());

    Ok(SeedReport { removed, inserted })
}
