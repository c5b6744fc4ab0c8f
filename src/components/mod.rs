//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_bar;
mod item_detail;
mod item_list;
mod new_item_form;
mod pagination;
mod search_box;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use item_detail::ItemDetail;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use pagination::Pagination;
pub use search_box::SearchBox;
