//! Pagination Component
//!
//! Previous/Next controls for the item list.

use leptos::prelude::*;

use crate::models::ItemPage;

/// Prev/Next buttons plus a page counter
///
/// Renders nothing until the first page has loaded. Buttons disable at the
/// boundaries and the counter only appears when there is more than one page.
#[component]
pub fn Pagination(
    page: ReadSignal<Option<ItemPage>>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            page.get()
                .map(|p| {
                    let counter = (p.total_pages > 1)
                        .then(|| format!("Page {} of {}", p.current_page, p.total_pages));
                    view! {
                        <div class="pagination">
                            <button
                                class="page-btn"
                                disabled=!p.has_prev()
                                on:click=move |_| on_prev.run(())
                            >
                                "Previous"
                            </button>
                            {counter.map(|text| view! { <span class="page-counter">{text}</span> })}
                            <button
                                class="page-btn"
                                disabled=!p.has_next()
                                on:click=move |_| on_next.run(())
                            >
                                "Next"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
