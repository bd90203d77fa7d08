//! Leptos Pagination Utilities
//!
//! Page windowing for list views: which page buttons to show, which slice
//! of the list is visible, and a ready-made control component.

mod component;
mod range;
mod state;

pub use component::Pagination;
pub use range::{page_range, PageToken, DEFAULT_SIBLING_COUNT};
pub use state::PaginationState;
