//! Pagination Control Component

use leptos::prelude::*;

use crate::range::{page_range, PageToken, DEFAULT_SIBLING_COUNT};
use crate::state::PaginationState;

/// Prev / page buttons / Next control
///
/// Renders nothing when everything fits on a single page.
///
/// # Arguments
/// * `state` - Page cursor owned by the list view
/// * `count` - Number of entries in the paginated collection
/// * `sibling_count` - Neighbours shown around the current page
/// * `class` - Extra CSS class for the wrapper
#[component]
pub fn Pagination(
    state: RwSignal<PaginationState>,
    #[prop(into)] count: Signal<usize>,
    #[prop(default = DEFAULT_SIBLING_COUNT)] sibling_count: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let wrapper_class = format!("pagination-controls {}", class).trim_end().to_string();
    let total_pages = move || state.get().total_pages(count.get());
    let current_page = move || state.get().current_page();

    // All navigation goes through PaginationState::go_to so invalid pages are ignored
    let go_to = move |page: u32| {
        let mut next = state.get_untracked();
        if next.go_to(page, count.get_untracked()) {
            state.set(next);
        }
    };

    view! {
        <Show when=move || { total_pages() > 1 }>
            <div class=wrapper_class.clone()>
                <button
                    type="button"
                    class="pagination-button"
                    disabled=move || current_page() == 1
                    on:click=move |_| go_to(current_page().saturating_sub(1))
                >
                    "Prev"
                </button>

                {move || {
                    let current = current_page();
                    page_range(current, total_pages(), sibling_count)
                        .into_iter()
                        .map(|token| match token {
                            PageToken::Page(page) => {
                                let is_current = page == current;
                                view! {
                                    <button
                                        type="button"
                                        class=if is_current { "pagination-button active-page" } else { "pagination-button" }
                                        aria-current=if is_current { Some("page") } else { None }
                                        on:click=move |_| go_to(page)
                                    >
                                        {page}
                                    </button>
                                }.into_any()
                            }
                            PageToken::Ellipsis => view! {
                                <span class="pagination-ellipsis" aria-hidden="true">"…"</span>
                            }.into_any(),
                        })
                        .collect_view()
                }}

                <button
                    type="button"
                    class="pagination-button"
                    disabled=move || current_page() == total_pages()
                    on:click=move |_| go_to(current_page() + 1)
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
