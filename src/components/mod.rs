//! UI Components
//!
//! Reusable Leptos components.

mod client_admin;
mod delete_confirm_button;
mod portfolio_admin;
mod toast_stack;
mod token_form;
mod work_gallery;

pub use client_admin::ClientAdmin;
pub use delete_confirm_button::DeleteConfirmButton;
pub use portfolio_admin::PortfolioAdmin;
pub use toast_stack::{ToastSink, ToastStack};
pub use token_form::TokenForm;
pub use work_gallery::WorkGallery;
