//! File-based task storage implementation
//!
//! Stores tasks as a JSON document collection in a single file on disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use super::model::{NewTask, Task, TaskPatch};
use super::repository::TaskRepository;
use crate::{Error, Result};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the collection
    cache: RwLock<HashMap<Uuid, Task>>,
}

impl FileTaskStore {
    /// Open the store at `path`
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
                Error::Storage(format!("Failed to read tasks file: {}", e))
            })?;
            let tasks: Vec<Task> = serde_json::from_str(&content).map_err(|e| {
                Error::Storage(format!("Failed to parse tasks file: {}", e))
            })?;
            tasks.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        debug!("Opened task store at {:?} with {} tasks", path, cache.len());

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the collection is staged in before it replaces `path`
    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    /// Write the collection to disk. Callers hold the write lock.
    ///
    /// The data file is only ever replaced by a rename, so it is either the
    /// previous or the new collection, never a partial write.
    async fn persist(&self, tasks: &HashMap<Uuid, Task>) -> Result<()> {
        let tasks: Vec<&Task> = tasks.values().collect();
        let content = serde_json::to_string_pretty(&tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let staging = self.staging_path();
        tokio::fs::write(&staging, content).await?;
        if let Err(e) = tokio::fs::rename(&staging, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
                warn!("Failed to remove staged tasks file {:?}: {}", staging, cleanup);
            }
            return Err(e.into());
        }
        Ok(())
    }
}

fn unused_id(cache: &HashMap<Uuid, Task>, mut task: Task) -> Task {
    while cache.contains_key(&task.id) {
        task.id = Uuid::new_v4();
    }
    task
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn insert(&self, task: NewTask) -> Result<Task> {
        let mut cache = self.cache.write().await;
        let task = unused_id(&cache, task.into_task());
        cache.insert(task.id, task.clone());

        if let Err(e) = self.persist(&cache).await {
            cache.remove(&task.id);
            return Err(e);
        }
        Ok(task)
    }

    async fn find_all(&self) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<Task> = cache.values().cloned().collect();
        // Sort by created_at descending (newest first)
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.get(&id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, patch: TaskPatch) -> Result<Option<Task>> {
        let mut cache = self.cache.write().await;
        let Some(previous) = cache.get(&id).cloned() else {
            return Ok(None);
        };

        let mut task = previous.clone();
        patch.apply(&mut task);
        cache.insert(id, task.clone());

        if let Err(e) = self.persist(&cache).await {
            cache.insert(id, previous);
            return Err(e);
        }
        Ok(Some(task))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let mut cache = self.cache.write().await;
        let Some(removed) = cache.remove(&id) else {
            return Ok(None);
        };

        if let Err(e) = self.persist(&cache).await {
            cache.insert(id, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    async fn replace_all(&self, tasks: Vec<NewTask>) -> Result<(usize, Vec<Task>)> {
        let mut cache = self.cache.write().await;
        let previous = std::mem::take(&mut *cache);

        let mut inserted = Vec::with_capacity(tasks.len());
        for task in tasks {
            let mut task = task.into_task();
            // Ids of the replaced records are not reused either
            while previous.contains_key(&task.id) || cache.contains_key(&task.id) {
                task.id = Uuid::new_v4();
            }
            cache.insert(task.id, task.clone());
            inserted.push(task);
        }

        if let Err(e) = self.persist(&cache).await {
            *cache = previous;
            return Err(e);
        }
        Ok((previous.len(), inserted))
    }
}
