//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─▶ TuiEvent ─▶ ProductList ─▶ Clicked(i) ─▶ update(Action::Click(i))
//!                                                              │ select()
//!                                                              ▼
//!              update(ProductWasSelected) ◀── rx ◀── tx ◀── observer
//! ```
//!
//! The observer runs synchronously inside `select()`; the loop drains the
//! channel before the next draw, so a click is fully handled within one turn.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (including
//! terminal resize) and otherwise sleeps in `poll`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, forward_selections, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ProductList, ProductListEvent, ProductListState};
use crate::tui::event::{TuiEvent, poll_event};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub product_list: ProductListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    // Selection notifications from the controller
    let (tx, rx) = mpsc::channel();
    forward_selections(&mut app, tx);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, &rx);
    ratatui::restore();

    info!("Storefront shutting down");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event()? else {
            continue;
        };
        needs_redraw = true;

        let action = match event {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Resize => None,
            _ => ProductList::new(&mut tui.product_list, &app.selection)
                .handle_event(&event)
                .map(|ProductListEvent::Clicked(index)| Action::Click(index)),
        };

        if let Some(action) = action {
            debug!("Dispatching {:?}", action);
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }

        // Notifications raised by this event's select() call
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            if update(app, action) == Effect::Quit {
                return Ok(());
            }
        }
    }
}
