//! Items State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through the transition methods on [`ItemsState`] so they can be tested
//! without a reactive runtime.

use chrono::{DateTime, Utc};
use reactive_stores::Store;

use crate::error::ApiError;
use crate::models::Item;

/// Message shown to the user when the item list cannot be fetched
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load items list. Please try again.";

/// Shared item list with its load status
#[derive(Clone, Debug, Default, Store)]
pub struct ItemsState {
    /// Newest manual additions first, otherwise server order
    pub items: Vec<Item>,
    /// True while the most recently started load is outstanding
    pub is_loading: bool,
    /// User-facing message from the last failed load
    pub error: Option<String>,
    /// Completion time of the last successful load
    pub last_fetch: Option<DateTime<Utc>>,
    /// Number handed to the most recently started load
    pub latest_request: u64,
}

/// Identifies one `load()` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl ItemsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a load as started: loading on, error cleared
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_request += 1;
        self.is_loading = true;
        self.error = None;
        LoadTicket(self.latest_request)
    }

    /// Apply the outcome of a load.
    ///
    /// Responses are applied in completion order, whichever call they belong
    /// to, so the last one to resolve decides `items` and `error`. Only the
    /// most recently started call turns `is_loading` off.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Item>, ApiError>, now: DateTime<Utc>) {
        match result {
            Ok(items) => {
                log::info!("[CACHE] Loaded {} items", items.len());
                self.items = items;
                self.error = None;
                self.last_fetch = Some(now);
            }
            Err(err) => {
                log::error!("[CACHE] Failed to load items list: {}", err);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        if ticket.0 == self.latest_request {
            self.is_loading = false;
        }
    }
}

/// Type alias for the store
pub type ItemsStore = Store<ItemsState>;

// ========================
// Item List Helpers
// ========================
// Operate on the `items` field alone so callers can write through
// `store.items()` without notifying `is_loading`/`error` subscribers.

/// Prepend an item the server already created
pub fn add_item(items: &mut Vec<Item>, item: Item) {
    items.insert(0, item);
}

/// Replace the entry with the same id in place.
/// Returns false, leaving the list untouched, when no entry matches.
pub fn update_item(items: &mut [Item], updated: Item) -> bool {
    match items.iter_mut().find(|item| item.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => {
            log::debug!("[CACHE] update ignored, no item with id {}", updated.id);
            false
        }
    }
}

/// Drop every entry with this id
pub fn remove_item(items: &mut Vec<Item>, id: u32) {
    items.retain(|item| item.id != id);
}
