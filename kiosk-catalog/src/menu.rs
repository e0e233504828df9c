use serde::{Deserialize, Serialize};
use crate::item::MenuItem;

/// A named category of menu items, e.g. "Burgers"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    category: String,
    #[serde(default)]
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            items: Vec::new(),
        }
    }

    /// Append an item; insertion order is display order
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// Snapshot of the items in this category
    pub fn items(&self) -> Vec<MenuItem> {
        self.items.clone()
    }

    /// Read-only walk over the items, in display order
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// Borrow the item shown at 1-based position `number`
    pub fn item(&self, number: usize) -> Option<&MenuItem> {
        number.checked_sub(1).and_then(|idx| self.items.get(idx))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
