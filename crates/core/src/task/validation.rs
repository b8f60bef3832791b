//! Validation of untrusted task input
//!
//! Request bodies are decoded into [`TaskInput`], a loosely typed mapping, and
//! then checked before anything reaches the store. Fields not listed here are
//! ignored, both on create and on update.

use serde::Deserialize;
use thiserror::Error;

use super::model::{NewTask, TaskPatch, TaskPriority, TaskStatus};

/// A task field failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required and cannot be empty")]
    MissingTitle,

    #[error("priority is required")]
    MissingPriority,

    #[error("invalid priority '{0}', expected one of: Low, Medium, High")]
    InvalidPriority(String),

    #[error("invalid status '{0}', expected one of: Pending, In Progress, Completed")]
    InvalidStatus(String),
}

/// Raw task fields as supplied by a client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TaskInput {
    /// Validate the input as a complete new task, applying creation defaults
    pub fn into_new_task(self) -> Result<NewTask, ValidationError> {
        let title = match self.title {
            Some(title) => check_title(title)?,
            None => return Err(ValidationError::MissingTitle),
        };
        let priority = match self.priority {
            Some(raw) => raw.parse::<TaskPriority>()?,
            None => return Err(ValidationError::MissingPriority),
        };
        let status = self
            .status
            .map(|raw| raw.parse::<TaskStatus>())
            .transpose()?
            .unwrap_or_default();

        Ok(NewTask {
            title,
            description: self.description,
            category: self.category,
            priority,
            progress: self.progress.unwrap_or(0),
            date: self.date,
            time: self.time,
            image: self.image,
            status,
        })
    }

    /// Validate the input as a partial update. No defaults are applied.
    pub fn into_patch(self) -> Result<TaskPatch, ValidationError> {
        Ok(TaskPatch {
            title: self.title.map(check_title).transpose()?,
            description: self.description,
            category: self.category,
            priority: self
                .priority
                .map(|raw| raw.parse::<TaskPriority>())
                .transpose()?,
            progress: self.progress,
            date: self.date,
            time: self.time,
            image: self.image,
            status: self
                .status
                .map(|raw| raw.parse::<TaskStatus>())
                .transpose()?,
        })
    }
}

fn check_title(title: String) -> Result<String, ValidationError> {
    if title.trim().is_empty() {
        Err(ValidationError::MissingTitle)
    } else {
        Ok(title)
    }
}
