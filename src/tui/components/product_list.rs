//! # ProductList Component
//!
//! The catalog view: one `ProductRow` per item, in catalog order.
//!
//! ## Responsibilities
//!
//! - Ask the selection controller, row by row, whether to highlight
//! - Keep the keyboard cursor visible (scrolling in whole rows)
//! - Hit-test mouse clicks against the rows drawn last frame
//! - Turn clicks and Enter/Space into `ProductListEvent::Clicked`
//!
//! ## Architecture
//!
//! `ProductList` is a transient component (created each frame) that wraps
//! `&'a mut ProductListState` (persistent state) and the
//! `SelectionController` (props). It never selects anything itself: the
//! parent turns `Clicked(index)` into `Action::Click(index)`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::selection::SelectionController;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::product_row::{ProductRow, ROW_HEIGHT};
use crate::tui::event::TuiEvent;

/// Cursor and scroll state for the product list.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct ProductListState {
    /// Row under the keyboard cursor (not the selection)
    pub cursor: Option<usize>,
    /// Index of the first visible row
    pub offset: usize,
    /// Rows drawn last frame, for hit testing
    pub row_areas: Vec<(usize, Rect)>,
}

impl ProductListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor by `delta` rows, clamped to `[0, len)`.
    /// With no cursor yet, Down lands on the first row and Up on the last.
    fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = None;
            return;
        }
        let next = match self.cursor {
            Some(current) => current.saturating_add_signed(delta).min(len - 1),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.cursor = Some(next);
    }

    /// Shift `offset` so the cursor row falls within `visible_rows`.
    fn scroll_to_cursor(&mut self, visible_rows: usize, len: usize) {
        let max_offset = len.saturating_sub(visible_rows.max(1));
        self.offset = self.offset.min(max_offset);
        let Some(cursor) = self.cursor else {
            return;
        };
        if cursor < self.offset {
            self.offset = cursor;
        } else if visible_rows > 0 && cursor >= self.offset + visible_rows {
            self.offset = cursor + 1 - visible_rows;
        }
    }

    /// Which item (if any) was drawn at this screen position last frame.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.row_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index)
    }
}

/// Events emitted by the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductListEvent {
    /// The row at this index was clicked (mouse, or Enter/Space on the cursor).
    Clicked(usize),
}

pub struct ProductList<'a> {
    pub state: &'a mut ProductListState,
    pub selection: &'a SelectionController,
}

impl<'a> ProductList<'a> {
    pub fn new(state: &'a mut ProductListState, selection: &'a SelectionController) -> Self {
        Self { state, selection }
    }
}

impl<'a> Component for ProductList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items = self.selection.items();
        self.state.row_areas.clear();

        if items.is_empty() {
            let empty = Paragraph::new("No products.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let visible_rows = (area.height / ROW_HEIGHT) as usize;
        self.state.scroll_to_cursor(visible_rows, items.len());

        let mut y = area.y;
        for (index, item) in items.iter().enumerate().skip(self.state.offset) {
            if y + ROW_HEIGHT > area.y + area.height {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, ROW_HEIGHT);
            let is_selected = self.selection.is_selected(Some(item));
            let is_hovered = self.state.cursor == Some(index);
            ProductRow::new(item, is_selected, is_hovered).render(frame, row_area);
            self.state.row_areas.push((index, row_area));
            y += ROW_HEIGHT;
        }
    }
}

impl<'a> EventHandler for ProductList<'a> {
    type Event = ProductListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ProductListEvent> {
        let len = self.selection.items().len();
        match *event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.state.move_cursor(-1, len);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.state.move_cursor(1, len);
                None
            }
            TuiEvent::Home => {
                self.state.cursor = (len > 0).then_some(0);
                None
            }
            TuiEvent::End => {
                self.state.cursor = len.checked_sub(1);
                None
            }
            TuiEvent::Submit => self
                .state
                .cursor
                .filter(|&index| index < len)
                .map(ProductListEvent::Clicked),
            TuiEvent::MouseClick(column, row) => {
                let index = self.state.hit_test(column, row)?;
                self.state.cursor = Some(index);
                Some(ProductListEvent::Clicked(index))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::seed_catalog;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn seeded() -> SelectionController {
        let mut selection = SelectionController::new();
        selection.set_items(seed_catalog());
        selection
    }

    fn draw(
        state: &mut ProductListState,
        selection: &SelectionController,
        height: u16,
    ) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(70, height)).unwrap();
        terminal
            .draw(|f| ProductList::new(state, selection).render(f, f.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    /// Top border line of each drawn row.
    fn row_tops(lines: &[String], state: &ProductListState) -> Vec<String> {
        state
            .row_areas
            .iter()
            .map(|(_, area)| lines[area.y as usize].clone())
            .collect()
    }

    #[test]
    fn test_renders_rows_in_catalog_order() {
        let selection = seeded();
        let mut state = ProductListState::new();
        let lines = draw(&mut state, &selection, 15);

        assert_eq!(
            state.row_areas.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(lines[1].contains("$29.99"));
        assert!(lines[6].contains("Blue Jacket"));
        assert!(lines[11].contains("$29.9"));
        assert!(!lines[11].contains("$29.99"));
        assert!(!lines.join("\n").contains("Selected"));
    }

    #[test]
    fn test_selecting_first_row_highlights_duplicate_sku_row() {
        let mut selection = seeded();
        selection.select(seed_catalog()[0].clone());
        let mut state = ProductListState::new();
        let lines = draw(&mut state, &selection, 15);

        let tops = row_tops(&lines, &state);
        assert!(tops[0].contains("Selected"));
        assert!(!tops[1].contains("Selected"));
        assert!(tops[2].contains("Selected"));
    }

    #[test]
    fn test_mouse_click_hits_row() {
        let selection = seeded();
        let mut state = ProductListState::new();
        draw(&mut state, &selection, 15);

        let mut list = ProductList::new(&mut state, &selection);
        assert_eq!(
            list.handle_event(&TuiEvent::MouseClick(10, 7)),
            Some(ProductListEvent::Clicked(1))
        );
        assert_eq!(list.state.cursor, Some(1));
        assert_eq!(list.handle_event(&TuiEvent::MouseClick(10, 40)), None);
    }

    #[test]
    fn test_submit_clicks_cursor_row() {
        let selection = seeded();
        let mut state = ProductListState::new();
        let mut list = ProductList::new(&mut state, &selection);

        assert_eq!(list.handle_event(&TuiEvent::Submit), None);
        list.handle_event(&TuiEvent::CursorDown);
        list.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            list.handle_event(&TuiEvent::Submit),
            Some(ProductListEvent::Clicked(1))
        );
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let selection = seeded();
        let mut state = ProductListState::new();
        let mut list = ProductList::new(&mut state, &selection);

        list.handle_event(&TuiEvent::CursorUp);
        assert_eq!(list.state.cursor, Some(2));
        list.handle_event(&TuiEvent::CursorDown);
        assert_eq!(list.state.cursor, Some(2));
        list.handle_event(&TuiEvent::Home);
        list.handle_event(&TuiEvent::CursorUp);
        assert_eq!(list.state.cursor, Some(0));
        list.handle_event(&TuiEvent::End);
        assert_eq!(list.state.cursor, Some(2));
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let selection = seeded();
        let mut state = ProductListState {
            cursor: Some(2),
            ..Default::default()
        };
        let lines = draw(&mut state, &selection, ROW_HEIGHT * 2);

        assert_eq!(state.offset, 1);
        assert_eq!(
            state.row_areas.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert!(lines[1].contains("Blue Jacket"));
    }

    #[test]
    fn test_empty_list() {
        let selection = SelectionController::new();
        let mut state = ProductListState::new();
        let lines = draw(&mut state, &selection, 5);
        assert!(lines.join("\n").contains("No products."));
        assert!(state.row_areas.is_empty());

        let mut list = ProductList::new(&mut state, &selection);
        list.handle_event(&TuiEvent::CursorDown);
        assert_eq!(list.state.cursor, None);
        assert_eq!(list.handle_event(&TuiEvent::End), None);
        assert_eq!(list.state.cursor, None);
    }
}
