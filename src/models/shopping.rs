//! Shopping list item model

use serde::{Deserialize, Serialize};

use super::ids::ShoppingItemId;
use crate::error::GraceError;

/// Category given to items added without one
pub const DEFAULT_ITEM_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    /// Always at least 1
    pub quantity: u32,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub purchased: bool,
}

fn default_category() -> String {
    DEFAULT_ITEM_CATEGORY.to_string()
}

impl ShoppingItem {
    /// Create an unpurchased item; a zero quantity becomes 1
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: ShoppingItemId::new(),
            name: name.into().trim().to_string(),
            quantity: quantity.max(1),
            category: default_category(),
            purchased: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.trim().is_empty() {
            self.category = category.trim().to_string();
        }
        self
    }

    pub fn toggle_purchased(&mut self) {
        self.purchased = !self.purchased;
    }

    pub fn validate(&self) -> Result<(), GraceError> {
        if self.name.trim().is_empty() {
            return Err(GraceError::Validation("Item name cannot be empty".into()));
        }
        if self.quantity == 0 {
            return Err(GraceError::Validation("Quantity must be at least 1".into()));
        }
        Ok(())
    }
}
