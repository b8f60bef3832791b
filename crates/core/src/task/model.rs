//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::validation::ValidationError;

/// Progress state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(ValidationError::InvalidPriority(other.to_string())),
        }
    }
}

/// A persisted task
///
/// `id`, `created_at` and `updated_at` are owned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: TaskPriority,
    pub progress: u32,
    pub date: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated task that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: TaskPriority,
    pub progress: u32,
    pub date: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
    pub status: TaskStatus,
}

impl NewTask {
    /// Create a new task with the required fields and defaults for the rest
    pub fn new(title: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
            priority,
            progress: 0,
            date: None,
            time: None,
            image: None,
            status: TaskStatus::default(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the progress percentage
    pub fn with_progress(mut self, progress: u32) -> Self {
        self.progress = progress;
        self
    }

    /// Set the scheduled date and time-of-day
    pub fn with_schedule(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self.time = Some(time.into());
        self
    }

    /// Set the image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Turn the draft into a record with a fresh identifier
    pub(crate) fn into_task(self) -> Task {
        let now = Utc::now();
        Task {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            category: self.category,
            priority: self.priority,
            progress: self.progress,
            date: self.date,
            time: self.time,
            image: self.image,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<TaskPriority>,
    pub progress: Option<u32>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Apply the supplied fields to `task`
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(category) = self.category {
            task.category = Some(category);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(progress) = self.progress {
            task.progress = progress;
        }
        if let Some(date) = self.date {
            task.date = Some(date);
        }
        if let Some(time) = self.time {
            task.time = Some(time);
        }
        if let Some(image) = self.image {
            task.image = Some(image);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        task.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_task_defaults() {
        let task = NewTask::new("Test task", TaskPriority::High);
        assert_eq!(task.title, "Test task");
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.progress, 0);
        assert!(task.description.is_none());
    }

    #[test]
    fn test_into_task_assigns_distinct_ids() {
        let a = NewTask::new("Same", TaskPriority::Low).into_task();
        let b = NewTask::new("Same", TaskPriority::Low).into_task();
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            json!("In Progress")
        );
        assert_eq!("In Progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert!(matches!(
            "in_progress".parse::<TaskStatus>(),
            Err(ValidationError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_priority_parse_is_case_sensitive() {
        assert_eq!("Medium".parse::<TaskPriority>().unwrap(), TaskPriority::Medium);
        assert!(matches!(
            "urgent".parse::<TaskPriority>(),
            Err(ValidationError::InvalidPriority(v)) if v == "urgent"
        ));
        assert!("high".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut task = NewTask::new("Write report", TaskPriority::High)
            .with_description("draft")
            .with_progress(40)
            .into_task();
        let before = task.clone();

        TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        }
        .apply(&mut task);

        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.id, before.id);
        assert_eq!(task.title, before.title);
        assert_eq!(task.description, before.description);
        assert_eq!(task.progress, 40);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.created_at, before.created_at);
        assert!(task.updated_at >= before.updated_at);
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = NewTask::new("Test task", TaskPriority::Low).into_task();
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["priority"], "Low");
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["progress"], 0);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
