//! # ProductDepartment Component
//!
//! One-line breadcrumb of a product's department path: `Men > Accessories > Hats`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SEPARATOR: &str = " > ";

pub struct ProductDepartment<'a> {
    pub department: &'a [String],
}

impl<'a> ProductDepartment<'a> {
    pub fn new(department: &'a [String]) -> Self {
        Self { department }
    }

    /// Breadcrumb spans: each name styled as a link, separators in between.
    pub fn line(&self) -> Line<'a> {
        let link = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED);
        let separator = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(self.department.len() * 2);
        for (i, name) in self.department.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, separator));
            }
            spans.push(Span::styled(name.as_str(), link));
        }
        Line::from(spans)
    }
}

impl<'a> Component for ProductDepartment<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}
