//! Item Detail Component
//!
//! Single-item view: loads one item by code, lets the user edit or delete
//! it, and distinguishes a vanished item from a failed request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::File;

use crate::api::{Api, ApiError};
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{Item, ItemDraft};

/// Lifecycle of the detail fetch
#[derive(Clone)]
enum DetailState {
    Loading,
    Ready(Item),
    /// The server answered 404; the item is gone, not the network
    NotFound,
    Failed(String),
}

/// Detail view for one item, addressed by code
///
/// The code itself is shown but never editable. Saving sends the whole edit
/// buffer plus any staged replacement image, then returns to the list; a
/// failed save or delete keeps the buffer and this view intact.
#[component]
pub fn ItemDetail(code: String) -> impl IntoView {
    let nav = expect_context::<AppContext>();
    let api = expect_context::<Api>();
    let code = StoredValue::new(code);

    let (state, set_state) = signal(DetailState::Loading);
    // edit buffer, filled once the item arrives
    let (name, set_name) = signal(String::new());
    let (rack, set_rack) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (image, set_image) = signal_local(None::<File>);

    // one fetch per mounted code; a different code means a fresh component
    {
        let api = api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            let code = code.get_value();
            spawn_local(async move {
                web_sys::console::log_1(&format!("[Detail] loading {code}").into());
                match api.get_item(&code).await {
                    Ok(item) => {
                        set_name.set(item.item_name.clone());
                        set_rack.set(item.rack_no.clone());
                        set_quantity.set(item.quantity.to_string());
                        set_description.set(item.description.clone().unwrap_or_default());
                        set_state.set(DetailState::Ready(item));
                    }
                    Err(ApiError::NotFound) => set_state.set(DetailState::NotFound),
                    Err(err) => {
                        web_sys::console::error_1(&format!("[Detail] {err}").into());
                        set_state.set(DetailState::Failed(err.to_string()));
                    }
                }
            });
        });
    }

    let on_image_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_ref::<web_sys::HtmlInputElement>().cloned())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        set_image.set(file);
    };

    let save = {
        let api = api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let draft = ItemDraft {
                item_code: code.get_value(),
                item_name: name.get().trim().to_string(),
                rack_no: rack.get().trim().to_string(),
                quantity: quantity.get().trim().parse().unwrap_or(0),
                description: description.get().trim().to_string(),
            };
            if draft.item_name.is_empty() || draft.rack_no.is_empty() {
                return;
            }
            let staged = image.get();

            let api = api.clone();
            spawn_local(async move {
                match api.update_item(&draft.item_code, &draft, staged.as_ref()).await {
                    Ok(updated) => {
                        web_sys::console::log_1(
                            &format!("[Detail] saved {}", updated.item_code).into(),
                        );
                        nav.open_list();
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("[Detail] {err}").into());
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(&err.to_string());
                        }
                    }
                }
            });
        }
    };

    view! {
        <div class="item-detail">
            <button class="back-btn" on:click=move |_| nav.open_list()>
                "Back to list"
            </button>
            {move || match state.get() {
                DetailState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                DetailState::NotFound => {
                    view! {
                        <div class="detail-error">
                            "No item exists with this code. It may have been deleted."
                        </div>
                    }
                        .into_any()
                }
                DetailState::Failed(message) => {
                    view! { <div class="detail-error">"Could not load item: " {message}</div> }
                        .into_any()
                }
                DetailState::Ready(item) => {
                    let save = save.clone();
                    let delete = {
                        let api = api.clone();
                        move |_: ()| {
                            let api = api.clone();
                            let code = code.get_value();
                            spawn_local(async move {
                                match api.delete_item(&code).await {
                                    Ok(()) => {
                                        web_sys::console::log_1(
                                            &format!("[Detail] deleted {code}").into(),
                                        );
                                        nav.open_list();
                                    }
                                    Err(err) => {
                                        web_sys::console::error_1(
                                            &format!("[Detail] {err}").into(),
                                        );
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.alert_with_message(&err.to_string());
                                        }
                                    }
                                }
                            });
                        }
                    };
                    let image_url = item
                        .image_filename
                        .as_ref()
                        .map(|filename| api.upload_url(filename));
                    view! {
                        <div class="detail-body">
                            <h2 class="detail-code">{item.item_code.clone()}</h2>
                            {image_url
                                .map(|url| {
                                    view! {
                                        <img class="detail-image" src=url alt=item.item_name.clone() />
                                    }
                                })}
                            <form class="edit-form" on:submit=save>
                                <label class="field-label">"Code"</label>
                                <input
                                    type="text"
                                    class="form-input"
                                    prop:value=item.item_code.clone()
                                    disabled=true
                                />
                                <label class="field-label">"Name"</label>
                                <input
                                    type="text"
                                    class="form-input"
                                    required=true
                                    prop:value=move || name.get()
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                />
                                <label class="field-label">"Rack no."</label>
                                <input
                                    type="text"
                                    class="form-input"
                                    required=true
                                    prop:value=move || rack.get()
                                    on:input=move |ev| set_rack.set(event_target_value(&ev))
                                />
                                <label class="field-label">"Quantity"</label>
                                <input
                                    type="number"
                                    class="form-input"
                                    min="0"
                                    prop:value=move || quantity.get()
                                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                                />
                                <label class="field-label">"Description"</label>
                                <textarea
                                    class="form-textarea"
                                    prop:value=move || description.get()
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                                <label class="field-label">"Replace image"</label>
                                <input
                                    type="file"
                                    class="form-file"
                                    accept="image/png,image/jpeg,image/gif"
                                    on:change=on_image_change
                                />
                                <button type="submit" class="save-btn">
                                    "Save changes"
                                </button>
                            </form>
                            <div class="detail-footer">
                                <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
                                <span class="detail-meta">"Added " {item.created_at.clone()}</span>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
