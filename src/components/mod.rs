//! UI Components
//!
//! Leptos components for the food page.

mod delete_dialog;
mod food_card;
mod food_form;
mod food_modal;
mod page_footer;
mod search_bar;

pub use delete_dialog::DeleteDialog;
pub use food_card::FoodCard;
pub use food_form::FoodFormView;
pub use food_modal::FoodModal;
pub use page_footer::PageFooter;
pub use search_bar::SearchBar;
