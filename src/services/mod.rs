//! Service layer for GraceHome
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, derived views, and audit logging.

pub mod budget;
pub mod calendar;
pub mod dashboard;
pub mod devotional;
pub mod shopping;
pub mod transaction;
pub mod verse;

pub use budget::{BudgetProgress, BudgetService, MonthlySummary};
pub use calendar::{CalendarService, EventUpdate, MonthCursor};
pub use devotional::DevotionalService;
pub use shopping::{ItemUpdate, ShoppingService};
pub use transaction::{CreateTransactionInput, TransactionService, TransactionUpdate};
pub use verse::{GeminiVerseClient, Verse, VerseSource};
