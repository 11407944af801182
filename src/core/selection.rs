//! # Selection Controller
//!
//! Owns the displayed catalog and the (at most one) selected item, and
//! notifies a single observer every time something is selected.
//!
//! ```text
//!   ┌────────────┐   select(x)   ┌──────────────┐
//!   │ Unselected │ ────────────▶ │ Selected(x)  │ ◀──┐
//!   └────────────┘               └──────┬───────┘    │ select(y)
//!                                       └────────────┘ (notifies, even if y == x)
//! ```
//!
//! There is no way back to `Unselected`.
//!
//! Selection is matched by `sku` only. Two items sharing a sku are the same
//! selection as far as [`SelectionController::is_selected`] is concerned,
//! and replacing the items does not clear or re-check the selection.

use log::debug;

use crate::core::catalog::CatalogItem;

/// Callback invoked synchronously on every `select` call.
pub type SelectionObserver = Box<dyn FnMut(&CatalogItem)>;

/// The displayed items plus the current selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub items: Vec<CatalogItem>,
    pub selected: Option<CatalogItem>,
}

#[derive(Default)]
pub struct SelectionController {
    state: SelectionState,
    observer: Option<SelectionObserver>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the observer, replacing any previous one.
    pub fn subscribe(&mut self, observer: impl FnMut(&CatalogItem) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Replace the displayed items. The current selection is left as is.
    pub fn set_items(&mut self, items: Vec<CatalogItem>) {
        debug!("Selection items replaced ({} items)", items.len());
        self.state.items = items;
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.state.items
    }

    pub fn selected(&self) -> Option<&CatalogItem> {
        self.state.selected.as_ref()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Make `item` the selection and notify the observer.
    ///
    /// `item` is not checked against [`items`](Self::items).
    pub fn select(&mut self, item: CatalogItem) {
        debug!("Selecting sku {}", item.sku);
        let selected = self.state.selected.insert(item);
        if let Some(observer) = self.observer.as_mut() {
            observer(&*selected);
        }
    }

    /// True iff both `item` and the current selection exist and share a sku.
    pub fn is_selected(&self, item: Option<&CatalogItem>) -> bool {
        match (item, self.state.selected.as_ref()) {
            (Some(item), Some(selected)) => item.sku == selected.sku,
            _ => false,
        }
    }
}
