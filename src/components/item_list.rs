//! Item List Component
//!
//! The main view: paginated item table with filters, live search and the
//! creation form. Owns the list query; every page load flows through one
//! effect so a query change can never fetch twice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::components::{FilterBar, NewItemForm, Pagination, SearchBox};
use crate::context::AppContext;
use crate::models::ItemPage;
use crate::query::{FetchGate, ListQuery};

/// Paginated list of items
///
/// The query signal is the single source of truth for page number and
/// filters. Submitting filters or landing a create resets it, pagination
/// steps it, and the tracking effect issues exactly one request per change.
/// Responses carry a generation token so a slow page 1 can never overwrite
/// a fast page 2.
#[component]
pub fn ItemList() -> impl IntoView {
    let nav = expect_context::<AppContext>();
    let api = expect_context::<Api>();

    let (query, set_query) = signal(ListQuery::default());
    let (page, set_page) = signal(None::<ItemPage>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (names, set_names) = signal(Vec::<String>::new());
    let gate = StoredValue::new(FetchGate::default());

    // dropdown options load once per visit and are not refreshed after
    // creates or deletes; a brand-new name shows up on the next visit
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list_item_names().await {
                    Ok(list) => set_names.set(list),
                    Err(err) => {
                        web_sys::console::error_1(&format!("[List] names: {err}").into());
                    }
                }
            });
        });
    }

    // one request per query change; the newest token wins
    {
        let api = api.clone();
        Effect::new(move |_| {
            let q = query.get();
            let Some(token) = gate.try_update_value(|g| g.issue()) else {
                return;
            };
            web_sys::console::log_1(
                &format!(
                    "[List] fetch #{token}: page={} name={:?} date={:?}",
                    q.page, q.name, q.date
                )
                .into(),
            );
            set_loading.set(true);
            set_error.set(None);

            let api = api.clone();
            spawn_local(async move {
                let tz_offset = js_sys::Date::new_0().get_timezone_offset() as i32;
                let result = api.list_items(&q, tz_offset).await;
                if gate.try_with_value(|g| g.is_current(token)) != Some(true) {
                    web_sys::console::log_1(&format!("[List] dropped stale #{token}").into());
                    return;
                }
                match result {
                    Ok(fetched) => set_page.set(Some(fetched)),
                    Err(err) => {
                        web_sys::console::error_1(&format!("[List] {err}").into());
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let go_prev = move |_: ()| set_query.set(query.get().prev());
    let go_next = move |_: ()| {
        if let Some(p) = page.get() {
            set_query.set(query.get().next(p.total_pages));
        }
    };
    let apply_filters = move |(name, date): (String, Option<String>)| {
        set_query.set(ListQuery::with_filters(name, date));
    };
    let clear_filters = move |_: ()| set_query.set(ListQuery::default());
    // one signal write, so the reload after a create is a single fetch
    let on_created = move |_: ()| set_query.set(ListQuery::default());

    view! {
        <div class="list-view">
            <div class="list-toolbar">
                <SearchBox />
                <FilterBar names=names on_apply=apply_filters on_clear=clear_filters />
            </div>
            <NewItemForm on_created=on_created />
            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>
            {move || {
                if let Some(message) = error.get() {
                    return view! {
                        <div class="list-error">"Could not load items: " {message}</div>
                    }
                        .into_any();
                }
                match page.get() {
                    None => view! { <div class="list-placeholder"></div> }.into_any(),
                    Some(p) if p.items.is_empty() => {
                        view! { <div class="empty-message">"No items found."</div> }.into_any()
                    }
                    Some(p) => {
                        view! {
                            <table class="item-table">
                                <thead>
                                    <tr>
                                        <th>"Code"</th>
                                        <th>"Name"</th>
                                        <th>"Rack"</th>
                                        <th>"Qty"</th>
                                        <th>"Added"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || p.items.clone()
                                        key=|item| item.id
                                        children=move |item| {
                                            let code = item.item_code.clone();
                                            view! {
                                                <tr
                                                    class="item-row"
                                                    on:click=move |_| nav.open_item(&code)
                                                >
                                                    <td class="code-cell">{item.item_code.clone()}</td>
                                                    <td>{item.item_name.clone()}</td>
                                                    <td>{item.rack_no.clone()}</td>
                                                    <td class="qty-cell">{item.quantity}</td>
                                                    <td class="date-cell">{item.created_at.clone()}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }
            }}
            <Show when=move || error.get().is_none()>
                <Pagination page=page on_prev=go_prev on_next=go_next />
            </Show>
        </div>
    }
}
