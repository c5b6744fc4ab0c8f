//! New Item Form Component
//!
//! Form for registering a new item, with an optional image attachment.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::File;

use crate::api::Api;
use crate::models::ItemDraft;

/// Element id of the image picker, used to reset it after a create lands
const IMAGE_INPUT_ID: &str = "new-item-image";

/// Blank a file input element so a consumed pick stops showing its filename
fn clear_file_input(id: &str) {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value("");
    }
}

/// Creation form for the list view
///
/// Code, name and rack are required; quantity defaults to zero and the image
/// is optional. On success the draft and the staged image are cleared and
/// `on_created` fires so the list can reload. On failure the draft stays so
/// the user can correct it.
#[component]
pub fn NewItemForm(#[prop(into)] on_created: Callback<()>) -> impl IntoView {
    let api = expect_context::<Api>();

    let (code, set_code) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (rack, set_rack) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (image, set_image) = signal_local(None::<File>);

    let on_image_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_ref::<web_sys::HtmlInputElement>().cloned())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        set_image.set(file);
    };

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = ItemDraft {
            item_code: code.get().trim().to_string(),
            item_name: name.get().trim().to_string(),
            rack_no: rack.get().trim().to_string(),
            quantity: quantity.get().trim().parse().unwrap_or(0),
            description: description.get().trim().to_string(),
        };
        // the server re-validates; this only blocks obviously empty submits
        if draft.item_code.is_empty() || draft.item_name.is_empty() || draft.rack_no.is_empty() {
            return;
        }
        let staged = image.get();

        let api = api.clone();
        spawn_local(async move {
            match api.create_item(&draft, staged.as_ref()).await {
                Ok(item) => {
                    web_sys::console::log_1(
                        &format!("[NewItem] created {}", item.item_code).into(),
                    );
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Item added successfully.");
                    }
                    set_code.set(String::new());
                    set_name.set(String::new());
                    set_rack.set(String::new());
                    set_quantity.set(String::new());
                    set_description.set(String::new());
                    // clear both the staged file and the input element; the
                    // element keeps displaying the old filename otherwise
                    set_image.set(None);
                    clear_file_input(IMAGE_INPUT_ID);
                    on_created.run(());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[NewItem] {err}").into());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&err.to_string());
                    }
                }
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                class="form-input"
                placeholder="Item code"
                required=true
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="form-input"
                placeholder="Item name"
                required=true
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="form-input"
                placeholder="Rack no."
                required=true
                prop:value=move || rack.get()
                on:input=move |ev| set_rack.set(event_target_value(&ev))
            />
            <input
                type="number"
                class="form-input form-input-qty"
                placeholder="Quantity"
                min="0"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <input
                type="text"
                class="form-input form-input-wide"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            />
            <input
                type="file"
                id=IMAGE_INPUT_ID
                class="form-file"
                accept="image/png,image/jpeg,image/gif"
                on:change=on_image_change
            />
            <button type="submit" class="form-submit-btn">
                "Add item"
            </button>
        </form>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn clear_file_input_blanks_the_element() {
        let document = web_sys::window()
            .expect("window")
            .document()
            .expect("document");
        // A file input rejects scripted values, so stage the leftover text
        // on a plain input carrying the same id
        let input: web_sys::HtmlInputElement = document
            .create_element("input")
            .expect("create input")
            .dyn_into()
            .expect("input element");
        input.set_id("stale-pick");
        input.set_value("leftover.png");
        let body = document.body().expect("body");
        body.append_child(&input).expect("attach input");

        clear_file_input("stale-pick");
        assert_eq!(input.value(), "");

        body.remove_child(&input).expect("detach input");
    }

    #[wasm_bindgen_test]
    fn clear_file_input_without_target_is_a_no_op() {
        clear_file_input("never-rendered");
    }
}
