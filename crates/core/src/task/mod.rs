//! Task module
//!
//! This module contains task-related types and logic.

mod file_store;
mod model;
mod repository;
mod validation;

pub use file_store::FileTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use validation::{TaskInput, ValidationError};
