//! UI Components
//!
//! Reusable Leptos components.

mod item_card;
mod item_grid;
mod sort_bar;
mod search_box;
mod category_autocomplete;
mod category_search;

pub use item_card::ItemCard;
pub use item_grid::ItemGrid;
pub use sort_bar::SortBar;
pub use search_box::SearchBox;
pub use category_autocomplete::CategoryAutocomplete;
pub use category_search::CategorySearch;
