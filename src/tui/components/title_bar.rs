//! # TitleBar Component
//!
//! Top status bar showing the store title, product count, and the latest
//! status message (e.g. "Selected Blue Jacket (SKU # NEATOJACKET)").
//!
//! Stateless: all three props come from the core `App`. The text is:
//!
//! 1. **Status message**: `"Inventory (3 products) | Selected Blue Jacket ..."`
//! 2. **Default**: `"Inventory (3 products)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub title: String,
    pub product_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, product_count: usize, status_message: String) -> Self {
        Self {
            title,
            product_count,
            status_message,
        }
    }

    pub fn text(&self) -> String {
        let noun = if self.product_count == 1 { "product" } else { "products" };
        if self.status_message.is_empty() {
            format!("{} ({} {})", self.title, self.product_count, noun)
        } else {
            format!(
                "{} ({} {}) | {}",
                self.title, self.product_count, noun, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}
