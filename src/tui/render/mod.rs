pub mod content;
pub mod help_overlay;
pub mod search_bar;
pub mod sidebar;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 24;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: search header (2 rows) | body | status row (1 row)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // search prompt + separator
            Constraint::Min(1),    // body
            Constraint::Length(1), // status row
        ])
        .split(area);

    // Body: sidebar | content
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(rows[1]);

    // Scroll math reads the content height; keep it current every frame
    app.viewport_height = body[1].height as usize;

    search_bar::render_search_header(frame, app, rows[0]);
    sidebar::render_sidebar(frame, app, body[0]);
    content::render_content(frame, app, body[1]);

    // Results dropdown floats over the content while a query is live
    if app.mode == Mode::Search && !app.search_input.trim().is_empty() {
        search_bar::render_results_dropdown(frame, app, body[1]);
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, rows[2]);
}
