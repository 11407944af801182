//! # ProductRow Component
//!
//! One bordered row per product:
//!
//! ```text
//! ┌ Selected ────────────────────────────────────────────────┐
//! │┌────────────────┐A Nice Black Hat                  $29.99│
//! ││ black-hat.jpg  │SKU # NICEHAT                           │
//! │└────────────────┘Men > Accessories > Hats                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Stateless: the parent list decides `is_selected` (from the selection
//! controller) and `is_hovered` (from its keyboard cursor).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::catalog::CatalogItem;
use crate::tui::component::Component;
use crate::tui::components::price_display::{PRICE_WIDTH, PriceDisplay};
use crate::tui::components::product_department::ProductDepartment;
use crate::tui::components::product_image::{IMAGE_WIDTH, ProductImage, truncate_str};

/// Rendered height of a row: three content lines plus the border.
pub const ROW_HEIGHT: u16 = 5;

const SELECTED_TITLE: &str = " Selected ";

#[derive(Clone, Copy)]
pub struct ProductRow<'a> {
    pub item: &'a CatalogItem,
    pub is_selected: bool,
    pub is_hovered: bool,
}

impl<'a> ProductRow<'a> {
    pub fn new(item: &'a CatalogItem, is_selected: bool, is_hovered: bool) -> Self {
        Self {
            item,
            is_selected,
            is_hovered,
        }
    }

    fn border_style(&self) -> Style {
        match (self.is_selected, self.is_hovered) {
            (true, _) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::White),
            (false, false) => Style::default().fg(Color::DarkGray),
        }
    }

    fn block(&self) -> Block<'static> {
        let block = Block::bordered().border_style(self.border_style());
        if self.is_selected {
            block.title(SELECTED_TITLE).title_style(self.border_style())
        } else {
            block
        }
    }
}

impl<'a> Component for ProductRow<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = self.block();
        let inner = block.inner(area);
        let row_style = if self.is_hovered {
            Style::default().bg(Color::Rgb(40, 40, 40))
        } else {
            Style::default()
        };
        frame.render_widget(block.style(row_style), area);

        let [image_area, content_area, price_area] = Layout::horizontal([
            Constraint::Length(IMAGE_WIDTH),
            Constraint::Min(0),
            Constraint::Length(PRICE_WIDTH),
        ])
        .areas(inner);

        ProductImage::new(self.item.image_file_name()).render(frame, image_area);

        let [header_area, meta_area, department_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(content_area);

        let width = content_area.width as usize;
        let header = Paragraph::new(truncate_str(&self.item.name, width))
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(header, header_area);

        let meta = Paragraph::new(truncate_str(&format!("SKU # {}", self.item.sku), width))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(meta, meta_area);

        ProductDepartment::new(&self.item.department).render(frame, department_area);

        // Price sits on the header line
        let [price_line, _] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(price_area);
        PriceDisplay::new(self.item.price).render(frame, price_line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::seed_catalog;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_row(item: &CatalogItem, is_selected: bool) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(70, ROW_HEIGHT)).unwrap();
        terminal
            .draw(|f| ProductRow::new(item, is_selected, false).render(f, f.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_row_shows_all_product_fields() {
        let item = &seed_catalog()[1];
        let lines = draw_row(item, false);
        let text = lines.join("\n");

        assert!(lines[1].contains("Blue Jacket"));
        assert!(lines[1].contains("$238.99"));
        assert!(lines[2].contains("SKU # NEATOJACKET"));
        assert!(lines[2].contains("blue-jacket.jpg"));
        assert!(lines[3].contains("Women > Apparel > Jackets & Vests"));
        assert!(!text.contains("Selected"));
    }

    #[test]
    fn test_selected_row_is_titled() {
        let item = &seed_catalog()[0];
        let lines = draw_row(item, true);
        assert!(lines[0].contains("Selected"));
    }

    #[test]
    fn test_selected_border_is_green() {
        let item = &seed_catalog()[0];
        let mut terminal = Terminal::new(TestBackend::new(70, ROW_HEIGHT)).unwrap();
        terminal
            .draw(|f| ProductRow::new(item, true, false).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].fg, Color::Green);
    }
}
