//! Configuration management module
//!
//! This module handles loading, saving, and managing application
//! configuration. Configuration is stored as JSON under the user
//! configuration directory with atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, InputSettings, WindowState};
