//! Typed collections over the key-value store
//!
//! A collection is an ordered list of records stored under one key. Every
//! mutation rewrites the whole list first, then appends an audit entry.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{GraceError, GraceResult};
use crate::models::{CalendarEvent, EntityId, ShoppingItem, Transaction};

use super::Storage;

/// A record that lives in a [`Collection`]
pub trait Record: Serialize + DeserializeOwned + Clone {
    type Id: EntityId;

    const ENTITY: EntityType;

    fn id(&self) -> Self::Id;

    /// Short human label for audit entries
    fn label(&self) -> Option<String> {
        None
    }

    fn not_found(identifier: String) -> GraceError;
}

impl Record for Transaction {
    type Id = crate::models::TransactionId;

    const ENTITY: EntityType = EntityType::Transaction;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn label(&self) -> Option<String> {
        Some(format!("{} {}", self.category, self.amount))
    }

    fn not_found(identifier: String) -> GraceError {
        GraceError::transaction_not_found(identifier)
    }
}

impl Record for CalendarEvent {
    type Id = crate::models::EventId;

    const ENTITY: EntityType = EntityType::Event;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn label(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn not_found(identifier: String) -> GraceError {
        GraceError::event_not_found(identifier)
    }
}

impl Record for ShoppingItem {
    type Id = crate::models::ShoppingItemId;

    const ENTITY: EntityType = EntityType::ShoppingItem;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn label(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn not_found(identifier: String) -> GraceError {
        GraceError::item_not_found(identifier)
    }
}

/// Handle to the records stored under one key
pub struct Collection<'a, T> {
    storage: &'a Storage,
    key: &'static str,
    _marker: PhantomData<T>,
}

impl<'a, T: Record> Collection<'a, T> {
    pub(super) fn new(storage: &'a Storage, key: &'static str) -> Self {
        Self {
            storage,
            key,
            _marker: PhantomData,
        }
    }

    /// All records in stored order
    pub fn load(&self) -> GraceResult<Vec<T>> {
        self.storage.read(self.key, Vec::new())
    }

    /// Replace the stored list
    pub fn save(&self, records: &[T]) -> GraceResult<()> {
        self.storage.write(self.key, records)
    }

    pub fn get(&self, id: T::Id) -> GraceResult<Option<T>> {
        Ok(self.load()?.into_iter().find(|r| r.id() == id))
    }

    pub fn count(&self) -> GraceResult<usize> {
        Ok(self.load()?.len())
    }

    /// Find the single record whose ID matches `query`
    pub fn resolve(&self, query: &str) -> GraceResult<T> {
        let mut matches: Vec<T> = self
            .load()?
            .into_iter()
            .filter(|r| r.id().matches(query))
            .collect();

        match matches.len() {
            0 => Err(T::not_found(query.to_string())),
            1 => Ok(matches.remove(0)),
            n => Err(GraceError::Validation(format!(
                "'{}' is ambiguous: {} records match",
                query, n
            ))),
        }
    }

    /// Append a new record
    pub fn insert(&self, record: T) -> GraceResult<T> {
        let mut records = self.load()?;
        records.push(record.clone());
        self.save(&records)?;

        debug!(key = self.key, id = %record.id(), "record created");
        self.storage.audit(&AuditEntry::create(
            T::ENTITY,
            record.id().to_string(),
            record.label(),
            &record,
        ));

        Ok(record)
    }

    /// Replace an existing record in place, returning the previous version
    pub fn replace(&self, record: T) -> GraceResult<T> {
        let mut records = self.load()?;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| T::not_found(record.id().to_string()))?;

        let before = std::mem::replace(slot, record.clone());
        self.save(&records)?;

        debug!(key = self.key, id = %record.id(), "record updated");
        self.storage.audit(&AuditEntry::update(
            T::ENTITY,
            record.id().to_string(),
            record.label(),
            &before,
            &record,
        ));

        Ok(before)
    }

    /// Remove a record, returning it
    pub fn remove(&self, id: T::Id) -> GraceResult<T> {
        let mut records = self.load()?;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| T::not_found(id.to_string()))?;

        let removed = records.remove(index);
        self.save(&records)?;

        debug!(key = self.key, id = %id, "record deleted");
        self.storage.audit(&AuditEntry::delete(
            T::ENTITY,
            id.to_string(),
            removed.label(),
            &removed,
        ));

        Ok(removed)
    }
}
