//! Search Box Component
//!
//! Live search over item codes and names with debounced requests,
//! keyboard navigation and click-to-open results.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Api;
use crate::context::AppContext;
use crate::models::SearchHit;
use crate::query::{self, FetchGate};

/// Quiet period after the last keystroke before a request goes out
const SEARCH_DEBOUNCE_MS: u32 = 300;
/// Grace period after blur so a click on a result still lands
const BLUR_CLEAR_MS: u32 = 200;

/// Debounced live search input with a results dropdown
///
/// Every keystroke clears the visible results and re-arms the timer, so at
/// most one request goes out per quiet period. Responses are checked against
/// a generation token and stale ones are dropped; everything that clears the
/// dropdown also supersedes the token, so a response landing after a clear
/// is dropped too. Search failures only log; the dropdown simply stays
/// empty.
#[component]
pub fn SearchBox() -> impl IntoView {
    let nav = expect_context::<AppContext>();
    let api = expect_context::<Api>();

    let (term, set_term) = signal(String::new());
    let (results, set_results) = signal(Vec::<SearchHit>::new());
    let (selected_index, set_selected_index) = signal(0usize);

    // pending debounce timer; replacing the slot cancels the old schedule
    let debounce: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    // pending blur-clear timer; focus cancels it
    let blur_clear: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    let gate = StoredValue::new(FetchGate::default());

    let choose = move |code: String| {
        gate.update_value(|g| g.supersede());
        set_results.set(Vec::new());
        set_selected_index.set(0);
        set_term.set(String::new());
        nav.open_item(&code);
    };

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        set_term.set(value.clone());
        set_results.set(Vec::new());
        set_selected_index.set(0);

        debounce.update_value(|slot| {
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
        });
        // anything still in flight is for the old term now
        gate.update_value(|g| g.supersede());

        // below the minimum the dropdown stays empty and nothing is sent
        let Some(needle) = query::searchable(&value).map(str::to_string) else {
            return;
        };

        let api = api.clone();
        let pending = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            let Some(token) = gate.try_update_value(|g| g.issue()) else {
                return;
            };
            spawn_local(async move {
                match api.search_items(&needle).await {
                    Ok(hits) => {
                        if gate.try_with_value(|g| g.is_current(token)) == Some(true) {
                            set_results.set(hits);
                            set_selected_index.set(0);
                        }
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("[Search] {err}").into());
                    }
                }
            });
        });
        debounce.set_value(Some(pending));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let hits = results.get();
        if hits.is_empty() {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                let current = selected_index.get();
                if current + 1 < hits.len() {
                    set_selected_index.set(current + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let current = selected_index.get();
                if current > 0 {
                    set_selected_index.set(current - 1);
                }
            }
            "Enter" => {
                ev.prevent_default();
                if let Some(hit) = hits.get(selected_index.get()) {
                    choose(hit.item_code.clone());
                }
            }
            "Escape" => {
                gate.update_value(|g| g.supersede());
                set_results.set(Vec::new());
                set_selected_index.set(0);
            }
            _ => {}
        }
    };

    let on_blur = move |_| {
        let pending = Timeout::new(BLUR_CLEAR_MS, move || {
            gate.try_update_value(|g| g.supersede());
            set_results.set(Vec::new());
            set_selected_index.set(0);
        });
        blur_clear.update_value(|slot| {
            if let Some(previous) = slot.replace(pending) {
                previous.cancel();
            }
        });
    };

    let on_focus = move |_| {
        blur_clear.update_value(|slot| {
            if let Some(pending) = slot.take() {
                pending.cancel();
            }
        });
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-input"
                placeholder="Search code or name"
                autocomplete="off"
                prop:value=move || term.get()
                on:input=on_input
                on:keydown=on_keydown
                on:focus=on_focus
                on:blur=on_blur
            />
            {move || {
                let hits = results.get();
                if hits.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = selected_index.get();
                    view! {
                        <div class="search-results">
                            {hits
                                .into_iter()
                                .enumerate()
                                .map(|(index, hit)| {
                                    let code = hit.item_code.clone();
                                    let is_selected = index == selected;
                                    view! {
                                        <button
                                            type="button"
                                            class=if is_selected { "search-result selected" } else { "search-result" }
                                            on:click=move |_| choose(code.clone())
                                        >
                                            <span class="result-code">{hit.item_code.clone()}</span>
                                            <span class="result-name">{hit.item_name.clone()}</span>
                                            {hit
                                                .description
                                                .clone()
                                                .map(|text| {
                                                    view! { <span class="result-description">{text}</span> }
                                                })}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
