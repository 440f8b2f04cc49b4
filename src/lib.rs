//! GraceHome - household organizer for families
//!
//! This library provides the core functionality for GraceHome: a finance
//! tracker with monthly budget goals, a family calendar with recurring
//! events, a shared shopping list and a fill-in-the-blank devotional study.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `i18n`: Translation tables and lookup
//! - `models`: Core data models (transactions, events, budget goals, etc.)
//! - `storage`: Key-value JSON storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use gracehome::config::{GracePaths, Settings};
//! use gracehome::services::calendar::occurrences_in_month;
//! use gracehome::storage::Storage;
//!
//! let paths = GracePaths::new()?;
//! let storage = Storage::open(&paths)?;
//! let events = storage.events().load()?;
//! let january = occurrences_in_month(&events, 2024, 1);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod i18n;
pub mod models;
pub mod services;
pub mod storage;

pub use error::GraceError;
