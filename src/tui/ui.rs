use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProductList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

const HELP_TEXT: &str = " ↑/↓ Move  Enter/Click Select  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, list_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        app.title.clone(),
        app.selection.items().len(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    ProductList::new(&mut tui.product_list, &app.selection).render(frame, list_area);

    let help = Line::from(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(help, help_area);
}
