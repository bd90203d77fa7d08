//! Category Autocomplete Component
//!
//! Text input with prefix-matched category suggestions.
//! Arrow keys move the highlight (wrapping), Enter picks it or submits the
//! typed text, Escape closes the list.

use leptos::prelude::*;

use crate::models::Category;
use crate::search::{category_suggestions, CursorAction, NavKey, SuggestionCursor, DEFAULT_MAX_SUGGESTIONS};

/// Category search input
///
/// Props:
/// - categories: all known categories
/// - on_submit: called with the picked suggestion or the raw input
#[component]
pub fn CategoryAutocomplete(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] on_submit: Callback<String>,
    #[prop(default = "Search…".to_string(), into)] placeholder: String,
    #[prop(default = DEFAULT_MAX_SUGGESTIONS)] max_suggestions: usize,
) -> impl IntoView {
    let (value, set_value) = signal(String::new());
    let cursor = RwSignal::new(SuggestionCursor::default());

    let suggestions = Memo::new(move |_| {
        categories.with(|cats| category_suggestions(cats, &value.get(), max_suggestions))
    });

    let select = move |name: String| {
        set_value.set(name.clone());
        cursor.update(|c| c.close());
        on_submit.run(name);
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = NavKey::from_key(&ev.key()) else {
            return;
        };
        let list = suggestions.get_untracked();

        let mut next = cursor.get_untracked();
        if next.is_open() && key != NavKey::Escape {
            ev.prevent_default();
        }
        let action = next.on_key(key, list.len());
        cursor.set(next);

        match action {
            CursorAction::Select(idx) => select(list[idx].clone()),
            CursorAction::Submit => on_submit.run(value.get_untracked()),
            CursorAction::Nothing => {}
        }
    };

    view! {
        <div class="cat-ac-wrapper">
            <input
                type="text"
                class="cat-ac-input"
                role="combobox"
                aria-autocomplete="list"
                aria-expanded=move || cursor.get().is_open().to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    set_value.set(event_target_value(&ev));
                    cursor.update(|c| c.on_input());
                }
                on:focus=move |_| {
                    if !suggestions.get_untracked().is_empty() {
                        cursor.update(|c| c.on_input());
                    }
                }
                on:blur=move |_| cursor.update(|c| c.close())
                on:keydown=on_keydown
            />

            <Show when=move || cursor.get().is_open() && !suggestions.get().is_empty()>
                <ul class="cat-ac-popover" role="listbox">
                    {move || {
                        let active = cursor.get().active();
                        let typed = value.get().trim().chars().count();
                        suggestions.get().into_iter().enumerate().map(|(idx, name)| {
                            let head: String = name.chars().take(typed).collect();
                            let rest: String = name.chars().skip(typed).collect();
                            let is_active = active == Some(idx);
                            view! {
                                <li
                                    role="option"
                                    aria-selected=is_active.to_string()
                                    class=if is_active { "cat-ac-option is-active" } else { "cat-ac-option" }
                                    // Keep focus on the input so blur doesn't close the list first
                                    on:mousedown=|ev| ev.prevent_default()
                                    on:mouseenter=move |_| cursor.update(|c| c.hover(idx))
                                    on:click=move |_| select(name.clone())
                                >
                                    <strong>{head}</strong>
                                    {rest}
                                </li>
                            }
                        }).collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
