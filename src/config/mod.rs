//! Configuration module for GraceHome
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (theme, language, currency)

pub mod paths;
pub mod settings;

pub use paths::GracePaths;
pub use settings::{Currency, Settings, Theme};
