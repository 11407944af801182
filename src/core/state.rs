//! # Application State
//!
//! Core business state for Storefront. This module contains domain logic only -
//! no TUI-specific types. Presentation state (cursor, scroll) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── selection: SelectionController  // displayed items + selected item
//! ├── title: String                   // title bar text
//! └── status_message: String          // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::catalog::CatalogItem;
use crate::core::config::ResolvedConfig;
use crate::core::selection::SelectionController;

pub struct App {
    pub selection: SelectionController,
    pub title: String,
    pub status_message: String,
}

impl App {
    pub fn new(title: String, products: Vec<CatalogItem>) -> Self {
        let mut selection = SelectionController::new();
        selection.set_items(products);
        Self {
            selection,
            title,
            status_message: String::from("Click a product to select it"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.title.clone(), config.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.title, "Test Store");
        assert_eq!(app.status_message, "Click a product to select it");
        assert_eq!(app.selection.items().len(), 3);
        assert!(app.selection.selected().is_none());
    }
}
