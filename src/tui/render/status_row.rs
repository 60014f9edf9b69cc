use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::search::MAX_RESULTS;
use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let (left, left_style) = match app.mode {
        Mode::Navigate => match &app.status_message {
            Some(msg) => (msg.clone(), Style::default().fg(theme.accent).bg(bg)),
            None => (
                " / search  tab category  1-9 jump  t theme  ? help  q quit".to_string(),
                Style::default().fg(theme.dim).bg(bg),
            ),
        },
        Mode::Search => {
            let count = app.results().len();
            let counter = if app.search_input.trim().is_empty() {
                String::new()
            } else if count == MAX_RESULTS {
                format!("{}+ results  ", count)
            } else {
                format!("{} results  ", count)
            };
            (
                format!(" {}\u{2191}\u{2193} select  Enter jump  ^Y copy  Esc cancel", counter),
                Style::default().fg(theme.dim).bg(bg),
            )
        }
    };

    // Right side: the active category title
    let active_title = app
        .catalog
        .category(app.navigator.active_category())
        .map(|c| c.title.as_str())
        .unwrap_or("");
    let right = format!("\u{00A7} {} ", active_title);

    let left_width = crate::util::unicode::display_width(&left);
    let right_width = crate::util::unicode::display_width(&right);
    let mut spans = vec![Span::styled(left, left_style)];
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, Style::default().fg(theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
