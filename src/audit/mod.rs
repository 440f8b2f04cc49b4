//! Audit logging for GraceHome
//!
//! Records every create, update and delete with before/after values in an
//! append-only, line-delimited JSON log.
//!
//! # Example
//!
//! ```rust,ignore
//! use gracehome::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(
//!     EntityType::Event,
//!     event.id.to_string(),
//!     Some(event.name.clone()),
//!     &event,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
