//! Listing Sort Orders

use std::cmp::Ordering;

use crate::models::Item;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    PriceDesc,
    PriceAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::DateDesc,
        SortOrder::DateAsc,
        SortOrder::PriceDesc,
        SortOrder::PriceAsc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "Posted: Newest to Oldest",
            SortOrder::DateAsc => "Posted: Oldest to Newest",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::PriceAsc => "Price: Low to High",
        }
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortOrder::DateDesc => b.date_posted.cmp(&a.date_posted),
            SortOrder::DateAsc => a.date_posted.cmp(&b.date_posted),
            SortOrder::PriceDesc => b.price_value().total_cmp(&a.price_value()),
            SortOrder::PriceAsc => a.price_value().total_cmp(&b.price_value()),
        }
    }
}

/// Stable sort, so equal keys keep their server order
pub fn sort_items(items: &mut [Item], order: SortOrder) {
    items.sort_by(|a, b| order.compare(a, b));
}
