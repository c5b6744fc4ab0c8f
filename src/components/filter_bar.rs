//! Filter Bar Component
//!
//! Name dropdown and date picker for the item list. Filters only take
//! effect on submit, never while picking.

use leptos::prelude::*;

/// Filter controls for the item list
///
/// `on_apply` receives the chosen name (empty string means all) and the
/// chosen date, already normalized to `None` when blank. `on_clear` resets
/// both pickers and asks the list to drop its filters.
#[component]
pub fn FilterBar(
    names: ReadSignal<Vec<String>>,
    #[prop(into)] on_apply: Callback<(String, Option<String>)>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let (name_choice, set_name_choice) = signal(String::new());
    let (date_choice, set_date_choice) = signal(String::new());

    let apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let date = date_choice.get();
        let date = (!date.is_empty()).then_some(date);
        on_apply.run((name_choice.get(), date));
    };

    let clear = move |_| {
        set_name_choice.set(String::new());
        set_date_choice.set(String::new());
        on_clear.run(());
    };

    view! {
        <form class="filter-bar" on:submit=apply>
            <select
                class="name-filter"
                prop:value=move || name_choice.get()
                on:change=move |ev| set_name_choice.set(event_target_value(&ev))
            >
                <option value="">"All names"</option>
                <For
                    each=move || names.get()
                    key=|name| name.clone()
                    children=move |name| {
                        let value = name.clone();
                        view! { <option value=value>{name}</option> }
                    }
                />
            </select>
            <input
                type="date"
                class="date-filter"
                prop:value=move || date_choice.get()
                on:input=move |ev| set_date_choice.set(event_target_value(&ev))
            />
            <button type="submit" class="filter-apply-btn">
                "Apply"
            </button>
            <button type="button" class="filter-clear-btn" on:click=clear>
                "Clear"
            </button>
        </form>
    }
}
