//! Core data models for GraceHome
//!
//! Transactions and budget goals for the finance tracker, calendar events,
//! shopping list items and the devotional study.

pub mod budget;
pub mod category;
pub mod devotional;
pub mod event;
pub mod ids;
pub mod money;
pub mod shopping;
pub mod transaction;

pub use budget::BudgetGoal;
pub use category::FinanceCategory;
pub use devotional::{DevotionalStudy, StudyAnswers, StudyPart, StudyScore, StudySection};
pub use event::{CalendarEvent, Recurrence};
pub use ids::{EntityId, EventId, ShoppingItemId, TransactionId};
pub use money::Money;
pub use shopping::ShoppingItem;
pub use transaction::{Transaction, TransactionValidationError};
