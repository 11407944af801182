//! # PriceDisplay Component
//!
//! Right-aligned `$<price>` label. The number is printed with Rust's
//! shortest round-trip formatting, so `29.9` shows as `$29.9`, not `$29.90`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

/// Width the price column reserves inside a product row.
pub const PRICE_WIDTH: u16 = 12;

pub struct PriceDisplay {
    pub price: f64,
}

impl PriceDisplay {
    pub fn new(price: f64) -> Self {
        Self { price }
    }

    pub fn label(&self) -> String {
        format!("${}", self.price)
    }
}

impl Component for PriceDisplay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.label())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right);
        frame.render_widget(paragraph, area);
    }
}
