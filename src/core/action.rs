//! # Actions
//!
//! Everything that can happen in Storefront becomes an `Action`.
//! User clicks a row? That's `Action::Click(index)`.
//! The selection controller notifies its observer? That's `Action::ProductWasSelected(item)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates it, and returns an `Effect` for the event loop to carry out.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::sync::mpsc::Sender;

use log::{info, warn};

use crate::core::catalog::CatalogItem;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the displayed products.
    SetItems(Vec<CatalogItem>),
    /// The row at this index was clicked.
    Click(usize),
    /// The selection controller announced a new selection.
    ProductWasSelected(CatalogItem),
    Quit,
}

/// What the event loop should do after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetItems(items) => {
            app.selection.set_items(items);
            Effect::None
        }
        Action::Click(index) => {
            match app.selection.items().get(index).cloned() {
                Some(item) => app.selection.select(item),
                None => warn!(
                    "Click on row {} ignored ({} products)",
                    index,
                    app.selection.items().len()
                ),
            }
            Effect::None
        }
        Action::ProductWasSelected(item) => {
            let rendered = serde_json::to_string(&item).unwrap_or_else(|_| format!("{item:?}"));
            info!("Product clicked: {}", rendered);
            app.status_message = format!("Selected {} (SKU # {})", item.name, item.sku);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Subscribe to the app's selection controller, forwarding every
/// notification into `tx` as `Action::ProductWasSelected`.
pub fn forward_selections(app: &mut App, tx: Sender<Action>) {
    app.selection.subscribe(move |item| {
        if tx.send(Action::ProductWasSelected(item.clone())).is_err() {
            warn!("Failed to forward selection of {}: receiver dropped", item.sku);
        }
    });
}
