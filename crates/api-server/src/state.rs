//! Application state

use std::sync::Arc;

use air_core::task::{FileTaskStore, TaskRepository};
use air_core::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: Arc<dyn TaskRepository>,
    environment: String,
}

impl AppState {
    /// Open the task store described by `config`
    pub async fn new(config: &Config) -> air_core::Result<Self> {
        let task_store = FileTaskStore::new(config.tasks_path()).await?;
        Ok(Self::with_store(Arc::new(task_store), config.environment.clone()))
    }

    /// Build state around an already opened store
    pub fn with_store(task_store: Arc<dyn TaskRepository>, environment: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                task_store,
                environment: environment.into(),
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &dyn TaskRepository {
        self.inner.task_store.as_ref()
    }

    pub fn environment(&self) -> &str {
        &self.inner.environment
    }
}
