//! Item Grid Component
//!
//! Front page listing backed by the shared item cache: title filter, sort
//! order, and one page of cards at a time.

use leptos::prelude::*;
use leptos_pagination::{Pagination, PaginationState};

use crate::components::{ItemCard, SearchBox, SortBar};
use crate::config::AppConfig;
use crate::models::Item;
use crate::context::{use_item_events, use_items_cache};
use crate::search::filter_by_title;
use crate::sort::{sort_items, SortOrder};
use crate::store::ItemsStateStoreFields;

#[component]
pub fn ItemGrid() -> impl IntoView {
    let cache = use_items_cache();
    let events = use_item_events();
    let config = use_context::<AppConfig>().unwrap_or_default();

    let order = RwSignal::new(SortOrder::default());
    let (term, set_term) = signal(String::new());
    let pagination = RwSignal::new(PaginationState::new(config.items_per_page));

    let visible = Memo::new(move |_| {
        let mut items = filter_by_title(&cache.items(), &term.get());
        sort_items(&mut items, order.get());
        items
    });

    reset_page_on_change(visible, pagination);

    let count = Signal::derive(move || visible.with(|items| items.len()));
    let page_items = move || {
        let page = pagination.get();
        visible.with(|items| page.slice(items).to_vec())
    };

    view! {
        <div class="item-list-section">
            <div class="item-list-toolbar">
                <SearchBox term=set_term debounce_ms=config.search_debounce_ms />
                <SortBar order=order />
                <button type="button" class="refresh-button" on:click=move |_| events.notify_changed()>
                    "Refresh"
                </button>
                <span class="last-fetch">
                    {move || cache.last_fetch().map(|at| format!("Updated {}", at.format("%H:%M:%S")))}
                </span>
            </div>

            {move || {
                let nothing_cached = cache.store().items().with(|items| items.is_empty());
                if cache.is_loading() && nothing_cached {
                    view! {
                        <div class="loading-container">
                            <p>"Loading items..."</p>
                        </div>
                    }.into_any()
                } else if let Some(message) = cache.error() {
                    view! {
                        <div class="error-container">
                            <p class="error-message">{message}</p>
                            <button type="button" class="retry-button" on:click=move |_| cache.load()>
                                "Try again"
                            </button>
                        </div>
                    }.into_any()
                } else if count.get() == 0 {
                    view! { <p class="empty-message">"No items have been posted yet."</p> }.into_any()
                } else {
                    view! {
                        <div class="item-card-grid">
                            <For
                                each=page_items
                                key=|item| item.id
                                children=|item| view! { <ItemCard item=item /> }
                            />
                        </div>
                    }.into_any()
                }
            }}

            <Pagination state=pagination count=count sibling_count=config.sibling_count />
        </div>
    }
}

/// Back to page 1 whenever the listed collection changes
fn reset_page_on_change(listed: Memo<Vec<Item>>, pagination: RwSignal<PaginationState>) {
    Effect::new(move |_| {
        listed.track();
        if pagination.get_untracked().current_page() != 1 {
            pagination.update(|p| p.reset());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::reactive_test::{run, settle};
    use crate::models::make_item;

    fn items(count: u32) -> Vec<Item> {
        (1..=count)
            .map(|id| make_item(id, &format!("Item {}", id), "1.00", "2024-01-01T00:00:00"))
            .collect()
    }

    #[tokio::test]
    async fn test_listing_change_returns_to_first_page() {
        run(async {
            let all = RwSignal::new(items(30));
            let term = RwSignal::new(String::new());
            let listed = Memo::new(move |_| filter_by_title(&all.get(), &term.get()));
            let pagination = RwSignal::new(PaginationState::new(10));
            reset_page_on_change(listed, pagination);
            settle().await;

            let count = listed.with_untracked(|l| l.len());
            pagination.update(|p| {
                p.go_to(3, count);
            });
            settle().await;
            assert_eq!(pagination.get_untracked().current_page(), 3);

            term.set("Item 1".to_string());
            settle().await;
            assert_eq!(pagination.get_untracked().current_page(), 1);
        })
        .await;
    }

    #[tokio::test]
    async fn test_unchanged_listing_keeps_page() {
        run(async {
            let all = RwSignal::new(items(30));
            let listed = Memo::new(move |_| all.get());
            let pagination = RwSignal::new(PaginationState::new(10));
            reset_page_on_change(listed, pagination);
            settle().await;

            pagination.update(|p| {
                p.go_to(2, 30);
            });
            // Same contents: the memo does not change, so the page stays
            all.set(items(30));
            settle().await;
            assert_eq!(pagination.get_untracked().current_page(), 2);
        })
        .await;
    }
}
