use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Render the category navigation pane. The active category carries an
/// accent marker; it tracks both explicit selection and scrolling.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let width = area.width as usize;
    let active = app.navigator.active_category();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            "MUXREF",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        " tmux \u{901F}\u{67E5}\u{8868}", // 速查表
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::default());

    for (i, category) in app.catalog.categories().iter().enumerate() {
        let is_active = category.id == active;
        let marker = if is_active {
            Span::styled("\u{258C}", Style::default().fg(theme.accent))
        } else {
            Span::styled(" ", Style::default())
        };
        let number = if i < 9 {
            format!("{} ", i + 1)
        } else {
            "  ".to_string()
        };
        let title = truncate_to_width(&category.title, width.saturating_sub(4));
        let style = if is_active {
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled(number, Style::default().fg(theme.dim)),
            Span::styled(title, style),
        ]));
    }

    let paragraph = Paragraph::new(Text::from(lines)).style(Style::default().bg(theme.surface));
    frame.render_widget(paragraph, area);
}
