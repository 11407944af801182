//! # ProductImage Component
//!
//! Terminals can't show the product photo, so this draws a small framed
//! placeholder with the image's file name instead.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Width the image column reserves inside a product row.
pub const IMAGE_WIDTH: u16 = 18;

pub struct ProductImage<'a> {
    pub image_name: &'a str,
}

impl<'a> ProductImage<'a> {
    pub fn new(image_name: &'a str) -> Self {
        Self { image_name }
    }
}

impl<'a> Component for ProductImage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(truncate_str(self.image_name, inner_width))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(paragraph, area);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("black-hat.jpg", 20), "black-hat.jpg");
        assert_eq!(truncate_str("blue-jacket.jpg", 10), "blue-ja...");
        assert_eq!(truncate_str("blue-jacket.jpg", 2), "..");
    }

    #[test]
    fn test_renders_framed_file_name() {
        let mut terminal = Terminal::new(TestBackend::new(IMAGE_WIDTH, 3)).unwrap();
        terminal
            .draw(|f| ProductImage::new("black-hat.jpg").render(f, f.area()))
            .unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].starts_with('┌'));
        assert!(lines[1].contains("black-hat.jpg"));
        assert!(lines[2].starts_with('└'));
    }
}
