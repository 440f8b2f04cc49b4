//! Transaction service
//!
//! CRUD for finance transactions with validation and month filtering.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::error::{GraceError, GraceResult};
use crate::models::{FinanceCategory, Money, Transaction};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub amount: Money,
    pub date: NaiveDate,
    pub category: FinanceCategory,
    pub notes: Option<String>,
}

/// Changes to apply to an existing transaction; `None` keeps the field
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category: Option<FinanceCategory>,
    pub notes: Option<String>,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> GraceResult<Transaction> {
        let notes = input.notes.unwrap_or_default();
        let txn = Transaction::new(input.amount, input.date, input.category, notes.trim());
        txn.validate()
            .map_err(|e| GraceError::Validation(e.to_string()))?;

        let txn = self.storage.transactions().insert(txn)?;
        info!(id = %txn.id, category = %txn.category, amount = %txn.amount, "transaction added");
        Ok(txn)
    }

    pub fn find(&self, query: &str) -> GraceResult<Transaction> {
        self.storage.transactions().resolve(query)
    }

    /// Apply `update` to the transaction matching `query`
    pub fn update(&self, query: &str, update: TransactionUpdate) -> GraceResult<Transaction> {
        let mut txn = self.find(query)?;

        if let Some(amount) = update.amount {
            txn.amount = amount;
        }
        if let Some(date) = update.date {
            txn.date = date;
        }
        if let Some(category) = update.category {
            txn.category = category;
        }
        if let Some(notes) = update.notes {
            txn.notes = notes.trim().to_string();
        }
        txn.validate()
            .map_err(|e| GraceError::Validation(e.to_string()))?;
        txn.updated_at = Utc::now();

        self.storage.transactions().replace(txn.clone())?;
        info!(id = %txn.id, "transaction updated");
        Ok(txn)
    }

    pub fn delete(&self, query: &str) -> GraceResult<Transaction> {
        let txn = self.find(query)?;
        let removed = self.storage.transactions().remove(txn.id)?;
        info!(id = %removed.id, "transaction deleted");
        Ok(removed)
    }

    /// All transactions, newest date first
    pub fn list(&self) -> GraceResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions().load()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Transactions narrowed to the month containing `month_of` and to one
    /// category, newest first. `None` leaves that filter off.
    pub fn list_filtered(
        &self,
        month_of: Option<NaiveDate>,
        category: Option<FinanceCategory>,
    ) -> GraceResult<Vec<Transaction>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|t| month_of.map_or(true, |day| t.in_month_of(day)))
            .filter(|t| category.map_or(true, |c| t.category == c))
            .collect())
    }
}
