//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::mpsc::{self, Receiver};

use crate::core::action::Action;
use crate::core::catalog::seed_catalog;
use crate::core::state::App;

/// Creates a test App over the seed catalog, with no observer attached.
pub fn test_app() -> App {
    App::new("Test Store".to_string(), seed_catalog())
}

/// Creates a test App whose selection observer forwards into a channel,
/// wired the same way `tui::run` wires it.
pub fn observed_app() -> (App, Receiver<Action>) {
    let mut app = test_app();
    let (tx, rx) = mpsc::channel();
    crate::core::action::forward_selections(&mut app, tx);
    (app, rx)
}

/// Renders a ratatui buffer into one string per row.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(area.x + x, area.y + y)].symbol())
                .collect::<String>()
        })
        .collect()
}
