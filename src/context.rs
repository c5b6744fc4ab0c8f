//! Application Context
//!
//! Navigation handle provided via Leptos Context API. The `Api` client is
//! provided alongside as its own context value.

use leptos::prelude::*;

/// Which view is on screen
///
/// The list and detail views are independent leaves; switching routes tears
/// one down and mounts the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Paginated list with create form and live search
    List,
    /// Single item addressed by its code
    Detail(String),
}

/// App-wide navigation handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(set_route: WriteSignal<Route>) -> Self {
        Self { set_route }
    }

    /// Back to the paginated list
    pub fn open_list(&self) {
        self.set_route.set(Route::List);
    }

    /// Jump to one item's detail view
    pub fn open_item(&self, code: &str) {
        self.set_route.set(Route::Detail(code.to_string()));
    }
}
