//! Shopping list service

use tracing::info;

use crate::error::GraceResult;
use crate::models::ShoppingItem;
use crate::storage::Storage;

/// Service for the family shopping list
pub struct ShoppingService<'a> {
    storage: &'a Storage,
}

/// Changes to apply to an item; `None` keeps the field
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
}

/// The list split by purchase state, each half in stored order
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    pub active: Vec<ShoppingItem>,
    pub purchased: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.purchased.is_empty()
    }
}

impl<'a> ShoppingService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add(&self, name: &str, quantity: Option<u32>, category: Option<&str>) -> GraceResult<ShoppingItem> {
        let mut item = ShoppingItem::new(name, quantity.unwrap_or(1));
        if let Some(category) = category {
            item = item.with_category(category);
        }
        item.validate()?;

        let item = self.storage.shopping().insert(item)?;
        info!(id = %item.id, name = %item.name, "item added");
        Ok(item)
    }

    pub fn find(&self, query: &str) -> GraceResult<ShoppingItem> {
        self.storage.shopping().resolve(query)
    }

    /// Flip the purchased flag
    pub fn toggle(&self, query: &str) -> GraceResult<ShoppingItem> {
        let mut item = self.find(query)?;
        item.toggle_purchased();
        self.storage.shopping().replace(item.clone())?;
        Ok(item)
    }

    pub fn edit(&self, query: &str, update: ItemUpdate) -> GraceResult<ShoppingItem> {
        let mut item = self.find(query)?;

        if let Some(name) = update.name {
            item.name = name.trim().to_string();
        }
        if let Some(quantity) = update.quantity {
            item.quantity = quantity.max(1);
        }
        if let Some(category) = update.category {
            item = item.with_category(category);
        }
        item.validate()?;

        self.storage.shopping().replace(item.clone())?;
        info!(id = %item.id, "item updated");
        Ok(item)
    }

    pub fn delete(&self, query: &str) -> GraceResult<ShoppingItem> {
        let item = self.find(query)?;
        self.storage.shopping().remove(item.id)
    }

    pub fn list(&self) -> GraceResult<ShoppingList> {
        let (purchased, active): (Vec<ShoppingItem>, Vec<ShoppingItem>) = self
            .storage
            .shopping()
            .load()?
            .into_iter()
            .partition(|item| item.purchased);
        Ok(ShoppingList { active, purchased })
    }
}
