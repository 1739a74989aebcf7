// src/catalog/models.rs

use rest_envelope::Pageable;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Item Models
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price_cents: u64,
    pub currency: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct CreateItem {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub currency: Option<String>,
}

// Paginated item list response
#[derive(Serialize, Debug)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
    pub paging: Pageable,
}

// ============================================================================
// In-memory catalogue
// ============================================================================

#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<Item>,
    next_id: u64,
}

pub type SharedCatalog = Arc<RwLock<Catalog>>;

impl Catalog {
    pub fn with_items(names: &[&str]) -> Self {
        let mut catalog = Self::default();
        for name in names {
            catalog.insert(name.to_string(), 100, "EUR".to_string());
        }
        catalog
    }

    pub fn total(&self) -> u64 {
        self.items.len() as u64
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.name.eq_ignore_ascii_case(name))
    }

    pub fn page(&self, offset: u64, limit: u64) -> Vec<Item> {
        self.items
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    pub fn insert(&mut self, name: String, price_cents: u64, currency: String) -> Item {
        self.next_id += 1;
        let item = Item {
            id: self.next_id,
            name,
            price_cents,
            currency,
        };
        self.items.push(item.clone());
        item
    }
}
