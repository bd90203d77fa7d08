//! Sort Bar Component
//!
//! Hover dropdown for picking the listing order.

use leptos::prelude::*;

use crate::sort::SortOrder;

#[component]
pub fn SortBar(order: RwSignal<SortOrder>) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div
            class="sort-bar"
            on:mouseenter=move |_| set_open.set(true)
            on:mouseleave=move |_| set_open.set(false)
        >
            <span class="sort-label">"Sort By "</span>
            <button type="button" class="sort-toggle">
                {move || order.get().label()}
            </button>
            <Show when=move || open.get()>
                <ul class="sort-options">
                    {SortOrder::ALL.into_iter().map(|option| {
                        view! {
                            <li
                                class=move || if order.get() == option { "sort-option selected" } else { "sort-option" }
                                on:click=move |_| {
                                    order.set(option);
                                    set_open.set(false);
                                }
                            >
                                {option.label()}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
