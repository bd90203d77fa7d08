//! Application Context
//!
//! Shared item cache and the "items changed" notification channel, provided
//! via Leptos Context API from the `App` root.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ItemSource;
use crate::models::Item;
use crate::store::{add_item, remove_item, update_item, ItemsState, ItemsStateStoreFields, ItemsStore};

/// Backend handle shared by screens that query beyond the cached list
pub type SharedSource = StoredValue<Rc<dyn ItemSource>, LocalStorage>;

/// DOM event other scripts dispatch on `window` after creating an item
pub const ITEM_CREATED_EVENT: &str = "itemCreated";

/// Session-wide item list backed by the REST API
///
/// Reads are reactive. `add`/`update`/`remove` are local optimistic
/// mutations: call them after the matching server request succeeded.
#[derive(Clone, Copy)]
pub struct ItemsCache {
    store: ItemsStore,
    source: SharedSource,
}

impl ItemsCache {
    pub fn new(source: Rc<dyn ItemSource>) -> Self {
        Self {
            store: ItemsStore::new(ItemsState::new()),
            source: StoredValue::new_local(source),
        }
    }

    /// Underlying store, for fine-grained field subscriptions
    pub fn store(&self) -> ItemsStore {
        self.store
    }

    pub fn items(&self) -> Vec<Item> {
        self.store.items().get()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading().get()
    }

    pub fn error(&self) -> Option<String> {
        self.store.error().get()
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.store.last_fetch().get()
    }

    /// Current state without subscribing
    pub fn snapshot(&self) -> ItemsState {
        self.store.get_untracked()
    }

    /// Start a reload in the background. Failures land in `error()`.
    pub fn load(&self) {
        let cache = *self;
        spawn_local(async move {
            cache.reload().await;
        });
    }

    /// Fetch the full list and replace the cached one.
    ///
    /// Earlier calls still in flight are not cancelled; whichever response
    /// arrives last decides the final list.
    pub async fn reload(&self) {
        let Some(source) = self.source.try_get_value() else {
            return;
        };
        let Some(ticket) = self.store.try_write().map(|mut state| state.begin_load()) else {
            return;
        };

        let result = source.list_items().await;

        if let Some(mut state) = self.store.try_write() {
            state.finish_load(ticket, result, Utc::now());
        }
    }

    pub fn add(&self, item: Item) {
        add_item(&mut self.store.items().write(), item);
    }

    /// Replace the item with the same id; unknown ids are ignored
    pub fn update(&self, item: Item) {
        update_item(&mut self.store.items().write(), item);
    }

    pub fn remove(&self, id: u32) {
        remove_item(&mut self.store.items().write(), id);
    }
}

/// In-process "the server-side item collection may have changed" signal
#[derive(Clone, Copy)]
pub struct ItemEvents {
    version: RwSignal<u32>,
}

impl ItemEvents {
    pub fn new() -> Self {
        Self {
            version: RwSignal::new(0),
        }
    }

    /// Bumped every time a notification is sent (tracked)
    pub fn version(&self) -> u32 {
        self.version.get()
    }

    /// A screen created an item on the server
    pub fn notify_item_created(&self) {
        log::debug!("[EVENTS] item created");
        self.notify_changed();
    }

    pub fn notify_changed(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }
}

impl Default for ItemEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the cache and event channel and provide both to descendants,
/// together with the backend handle.
///
/// The cache loads once right away and again after every notification.
pub fn provide_items_cache(source: Rc<dyn ItemSource>) -> (ItemsCache, ItemEvents) {
    let cache = ItemsCache::new(source);
    let events = ItemEvents::new();

    Effect::new(move |_| {
        let version = events.version();
        log::debug!("[CACHE] load triggered, events version={}", version);
        cache.load();
    });

    provide_context(cache.source);
    provide_context(cache);
    provide_context(events);
    (cache, events)
}

/// Forward `itemCreated` events dispatched on `window` to [`ItemEvents`]
pub fn bind_window_item_created(events: ItemEvents) {
    use wasm_bindgen::closure::Closure;

    let on_created = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        events.notify_item_created();
    });

    if let Some(win) = web_sys::window() {
        if let Err(err) = win.add_event_listener_with_callback(ITEM_CREATED_EVENT, on_created.as_ref().unchecked_ref()) {
            log::error!("[EVENTS] Failed to listen for {}: {:?}", ITEM_CREATED_EVENT, err);
        }
    }
    on_created.forget();
}

/// Get the item cache from context
pub fn use_items_cache() -> ItemsCache {
    expect_context::<ItemsCache>()
}

pub fn use_item_events() -> ItemEvents {
    expect_context::<ItemEvents>()
}

pub fn use_item_source() -> SharedSource {
    expect_context::<SharedSource>()
}


#[cfg(test)]
mod tests {
    use super::reactive_test::{run, settle};
    use super::*;
    use crate::api::fake::FakeSource;
    use crate::error::ApiError;
    use crate::models::make_item;
    use crate::store::LOAD_ERROR_MESSAGE;

    fn item(id: u32) -> Item {
        make_item(id, &format!("Item {}", id), "5.00", "2024-02-01T12:00:00")
    }

    fn cache_with(responses: Vec<Result<Vec<Item>, ApiError>>) -> ItemsCache {
        ItemsCache::new(Rc::new(FakeSource::with_lists(responses)))
    }

    fn ids(cache: &ItemsCache) -> Vec<u32> {
        cache.snapshot().items.iter().map(|i| i.id).collect()
    }

    #[tokio::test]
    async fn test_reload_success() {
        let cache = cache_with(vec![Ok(vec![item(1), item(2)])]);
        cache.reload().await;

        let state = cache.snapshot();
        assert_eq!(ids(&cache), vec![1, 2]);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(state.last_fetch.is_some());
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_stale_items() {
        let cache = cache_with(vec![Ok(vec![item(1), item(2)]), Err(ApiError::Status(502))]);
        cache.reload().await;
        cache.reload().await;

        let state = cache.snapshot();
        assert_eq!(ids(&cache), vec![1, 2]);
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR_MESSAGE));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_reload_replaces_not_merges() {
        let cache = cache_with(vec![Ok(vec![item(1), item(2)]), Ok(vec![])]);
        cache.reload().await;
        cache.reload().await;
        assert!(ids(&cache).is_empty());
    }

    #[tokio::test]
    async fn test_local_mutations() {
        let cache = cache_with(vec![Ok(vec![item(1), item(2)])]);
        cache.reload().await;

        cache.add(item(3));
        assert_eq!(ids(&cache), vec![3, 1, 2]);

        let before = cache.snapshot().items;
        cache.update(item(99));
        assert_eq!(cache.snapshot().items, before);

        cache.remove(1);
        cache.remove(1);
        assert_eq!(ids(&cache), vec![3, 2]);
    }

    #[test]
    fn test_events_bump_version() {
        let events = ItemEvents::new();
        assert_eq!(events.version.get_untracked(), 0);
        events.notify_item_created();
        events.notify_changed();
        assert_eq!(events.version.get_untracked(), 2);
    }

    #[tokio::test]
    async fn test_reload_with_disposed_source_stays_idle() {
        let cache = cache_with(vec![Ok(vec![item(1)])]);
        cache.source.dispose();
        cache.reload().await;

        let state = cache.snapshot();
        assert!(!state.is_loading);
        assert!(state.items.is_empty());
    }

    #[tokio::test]
    async fn test_notification_triggers_reload() {
        run(async {
            let source = Rc::new(FakeSource::with_lists(vec![
                Ok(vec![item(1)]),
                Ok(vec![item(1), item(2)]),
            ]));
            let (cache, events) = provide_items_cache(source.clone());

            settle().await;
            assert_eq!(*source.list_calls.borrow(), 1);
            assert_eq!(ids(&cache), vec![1]);

            events.notify_changed();
            settle().await;
            assert_eq!(*source.list_calls.borrow(), 2);
            assert_eq!(ids(&cache), vec![1, 2]);
            assert!(!cache.snapshot().is_loading);
        })
        .await;
    }

    #[tokio::test]
    async fn test_item_created_triggers_reload() {
        run(async {
            let source = Rc::new(FakeSource::default());
            let (_cache, events) = provide_items_cache(source.clone());
            settle().await;

            events.notify_item_created();
            events.notify_item_created();
            settle().await;
            assert!(*source.list_calls.borrow() >= 2);
        })
        .await;
    }
}
