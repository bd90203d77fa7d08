//! Search Box Component
//!
//! Title filter input; publishes the term only after typing pauses.

use leptos::prelude::*;

use crate::config::DEFAULT_SEARCH_DEBOUNCE_MS;
use crate::search::Debouncer;

#[component]
pub fn SearchBox(
    term: WriteSignal<String>,
    #[prop(default = DEFAULT_SEARCH_DEBOUNCE_MS)] debounce_ms: u32,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    // Timer handles are not Send; keep them in local storage
    let debouncer = StoredValue::new_local(Debouncer::new(debounce_ms));

    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-input"
                placeholder="Search items…"
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_input_value.set(value.clone());
                    debouncer.with_value(|d| d.call(move || term.set(value)));
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    type="button"
                    class="search-clear"
                    on:click=move |_| {
                        debouncer.with_value(|d| d.cancel());
                        set_input_value.set(String::new());
                        term.set(String::new());
                    }
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
