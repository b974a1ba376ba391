//! Headless page controllers.
//!
//! Each page is a state value a view layer renders and forwards user actions to.
//! Nothing here draws anything.

mod categories;
mod layout;
mod list;
mod login;
mod orders;
mod products;
mod state;
mod suppliers;
mod toast;

pub use categories::{CategoriesPage, CategoryForm};
pub use layout::{DashboardLayout, MENU, MenuItem};
pub use list::ListPage;
pub use login::LoginPage;
pub use orders::{OrderForm, OrdersPage};
pub use products::{ProductForm, ProductsPage};
pub use state::{Dialog, LoadState};
pub use suppliers::{SupplierForm, SuppliersPage};
pub use toast::{Toast, ToastKind, Toasts};

/// Case-insensitive substring match; `needle` is already lowercased.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Presence check for a form field.
pub(crate) fn required(value: &str, field: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(trimmed.to_string())
    }
}
