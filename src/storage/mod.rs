//! Storage layer for GraceHome
//!
//! A plain key-value interface (`read(key, default)` / `write(key, value)`)
//! over JSON documents, with typed collections and an audit trail on top.

pub mod collection;
pub mod file_io;
pub mod kv;

pub use collection::{Collection, Record};
pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::GracePaths;
use crate::error::{GraceError, GraceResult};
use crate::models::{BudgetGoal, CalendarEvent, ShoppingItem, StudyAnswers, Transaction};

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const BUDGET_GOALS_KEY: &str = "budgetGoals";
pub const EVENTS_KEY: &str = "calendarEvents";
pub const SHOPPING_KEY: &str = "shoppingList";
pub const DEVOTIONAL_ANSWERS_KEY: &str = "devotionalAnswers";

/// Main storage coordinator
pub struct Storage {
    store: Box<dyn KeyValueStore>,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the on-disk store under `paths`, creating directories as needed
    pub fn open(paths: &GracePaths) -> GraceResult<Self> {
        paths.ensure_directories()?;
        debug!(dir = %paths.data_dir().display(), "opening json store");

        Ok(Self {
            store: Box::new(JsonFileStore::new(paths.data_dir())),
            audit: Some(AuditLogger::new(paths.audit_log())),
        })
    }

    /// Volatile storage without an audit log
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()), None)
    }

    pub fn with_store(store: Box<dyn KeyValueStore>, audit: Option<AuditLogger>) -> Self {
        Self { store, audit }
    }

    /// Read the value stored under `key`, or `default` when absent
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> GraceResult<T> {
        match self.store.get(key)? {
            Some(value) => {
                trace!(key, "read");
                serde_json::from_value(value).map_err(|e| {
                    GraceError::Storage(format!("Failed to decode '{}': {}", key, e))
                })
            }
            None => Ok(default),
        }
    }

    /// Replace the value stored under `key`
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> GraceResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| GraceError::Storage(format!("Failed to encode '{}': {}", key, e)))?;
        trace!(key, "write");
        self.store.set(key, value)
    }

    pub fn transactions(&self) -> Collection<'_, Transaction> {
        Collection::new(self, TRANSACTIONS_KEY)
    }

    pub fn events(&self) -> Collection<'_, CalendarEvent> {
        Collection::new(self, EVENTS_KEY)
    }

    pub fn shopping(&self) -> Collection<'_, ShoppingItem> {
        Collection::new(self, SHOPPING_KEY)
    }

    pub fn budget_goals(&self) -> GraceResult<Vec<BudgetGoal>> {
        self.read(BUDGET_GOALS_KEY, Vec::new())
    }

    pub fn set_budget_goals(&self, goals: &[BudgetGoal]) -> GraceResult<()> {
        self.write(BUDGET_GOALS_KEY, goals)
    }

    pub fn devotional_answers(&self) -> GraceResult<StudyAnswers> {
        self.read(DEVOTIONAL_ANSWERS_KEY, StudyAnswers::new())
    }

    pub fn set_devotional_answers(&self, answers: &StudyAnswers) -> GraceResult<()> {
        self.write(DEVOTIONAL_ANSWERS_KEY, answers)
    }

    /// Append to the audit log, if this storage keeps one
    ///
    /// Runs after the data write has landed, so a failure here is logged and
    /// does not fail the change it describes.
    pub fn audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                warn!(error = %e, entity = %entry.entity_type, id = %entry.entity_id, "failed to write audit entry");
            }
        }
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }
}
