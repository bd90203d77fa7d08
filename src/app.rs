//! Marketplace Frontend App
//!
//! Root component: creates the session's item cache and hands it to every
//! screen through context.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{HttpItemSource, ItemSource};
use crate::components::{CategorySearch, ItemGrid};
use crate::config::AppConfig;
use crate::context::{bind_window_item_created, provide_items_cache};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let source: Rc<dyn ItemSource> = if config.api_base.is_empty() {
        Rc::new(HttpItemSource::same_origin())
    } else {
        Rc::new(HttpItemSource::new(config.api_base.clone()))
    };
    provide_context(config);

    // Loads immediately and again on every "items changed" notification
    let (_cache, events) = provide_items_cache(source);
    bind_window_item_created(events);

    view! {
        <div class="dashboard-container front-page">
            <div class="dashboard-content">
                <CategorySearch />

                <div class="page-header">
                    <h1 class="page-title">"Items"</h1>
                </div>

                <ItemGrid />
            </div>
        </div>
    }
}
