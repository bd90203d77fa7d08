//! Frontend Models
//!
//! Data structures matching the marketplace REST API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Item listing (matches `/api/items/list_items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Decimal text as sent by the backend, e.g. "12.50"
    pub price: String,
    pub posted_by: String,
    pub date_posted: NaiveDateTime,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub star_rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

impl Item {
    /// Price as a number, 0.0 when the backend sent something unparsable
    pub fn price_value(&self) -> f64 {
        self.price.trim().parse().unwrap_or(0.0)
    }

    pub fn category_names(&self) -> String {
        self.categories
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_key: Option<String>,
}

/// Body of `/api/items/categories`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryList {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Body of `/api/items/search`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub item_count: usize,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[cfg(test)]
pub(crate) fn make_item(id: u32, title: &str, price: &str, date: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: String::new(),
        price: price.to_string(),
        posted_by: "seller".to_string(),
        date_posted: NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S")
            .expect("valid test date"),
        categories: vec![],
        star_rating: 0.0,
        review_count: 0,
    }
}
