//! Category Search Component
//!
//! Category autocomplete plus the results of the last search. Searches go
//! straight to the backend and do not touch the shared item cache.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::search_items;
use crate::components::{CategoryAutocomplete, ItemCard};
use crate::context::use_item_source;
use crate::models::{Category, Item};

#[derive(Clone, Debug, PartialEq)]
enum SearchStatus {
    Idle,
    Searching(String),
    Done(String, Vec<Item>),
    Failed(String),
}

#[component]
pub fn CategorySearch() -> impl IntoView {
    let source = use_item_source();
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let status = RwSignal::new(SearchStatus::Idle);

    // Load categories once on mount
    spawn_local(async move {
        let Some(src) = source.try_get_value() else {
            return;
        };
        match src.list_categories().await {
            Ok(loaded) => set_categories.set(loaded),
            Err(err) => log::error!("[SEARCH] Failed to load categories: {}", err),
        }
    });

    // Only the most recent search may write its results
    let latest_search = StoredValue::new(0u64);

    let on_submit = Callback::new(move |term: String| {
        let term = term.trim().to_string();
        if term.is_empty() {
            return;
        }
        latest_search.update_value(|n| *n += 1);
        let search_id = latest_search.get_value();
        status.set(SearchStatus::Searching(term.clone()));

        spawn_local(async move {
            let Some(src) = source.try_get_value() else {
                return;
            };
            let next = match search_items(src.as_ref(), &term).await {
                Ok(items) => SearchStatus::Done(term, items),
                Err(err) => SearchStatus::Failed(err.to_string()),
            };
            if latest_search.try_get_value() == Some(search_id) {
                status.set(next);
            }
        });
    });

    view! {
        <div class="search-interface">
            <CategoryAutocomplete
                categories=categories
                on_submit=on_submit
                placeholder="Search items or categories…"
            />

            <div class="categories-preview">
                {move || categories.get().into_iter().take(8).map(|cat| {
                    let name = cat.name.clone();
                    view! {
                        <button type="button" class="category-tag" on:click=move |_| on_submit.run(name.clone())>
                            {cat.name}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || match status.get() {
                SearchStatus::Idle => ().into_any(),
                SearchStatus::Searching(_) => view! { <p>"Loading results..."</p> }.into_any(),
                SearchStatus::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                SearchStatus::Done(term, items) if items.is_empty() => view! {
                    <p>{format!("Search results for \"{}\" not found or doesn't exist.", term)}</p>
                }.into_any(),
                SearchStatus::Done(term, items) => view! {
                    <h2>{format!("Search Results for \"{}\"", term)}</h2>
                    <div class="item-card-grid">
                        {items.into_iter().map(|item| view! { <ItemCard item=item /> }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
