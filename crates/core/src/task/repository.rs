//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{NewTask, Task, TaskPatch};
use crate::Result;

/// Repository interface for task CRUD operations
///
/// Lookups return `Ok(None)` when no record carries the id; `Err` is reserved
/// for storage failures.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a validated task and return it with its assigned id
    async fn insert(&self, task: NewTask) -> Result<Task>;

    /// Get all tasks
    async fn find_all(&self) -> Result<Vec<Task>>;

    /// Get a task by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>>;

    /// Apply a partial update and return the updated task
    async fn update_by_id(&self, id: Uuid, patch: TaskPatch) -> Result<Option<Task>>;

    /// Delete a task and return what was removed
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Task>>;

    /// Swap the whole collection for `tasks` in one write.
    /// Returns how many tasks were removed and the inserted records.
    async fn replace_all(&self, tasks: Vec<NewTask>) -> Result<(usize, Vec<Task>)>;
}
