//! Stockroom Frontend App
//!
//! Root component: provides the API handle and navigation context, then
//! switches between the list and detail views.

use leptos::prelude::*;

use crate::api::{Api, DEFAULT_API_BASE};
use crate::components::{ItemDetail, ItemList};
use crate::context::{AppContext, Route};

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::List);

    provide_context(AppContext::new(set_route));
    provide_context(Api::new(
        option_env!("STOCKROOM_API_BASE").unwrap_or(DEFAULT_API_BASE),
    ));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title">"Stockroom"</h1>
            </header>
            <main class="main-content">
                {move || match route.get() {
                    Route::List => view! { <ItemList /> }.into_any(),
                    Route::Detail(code) => view! { <ItemDetail code=code /> }.into_any(),
                }}
            </main>
        </div>
    }
}
