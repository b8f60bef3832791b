//! Core library for the AIR task backend
//!
//! This crate contains the core business logic, including:
//! - Task records and their validation
//! - The task store interface and its JSON document implementation
//! - Seed fixtures
//! - Environment configuration

pub mod config;
pub mod error;
pub mod seed;
pub mod task;

pub use config::Config;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
