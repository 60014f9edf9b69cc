use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::model::Command;
use crate::tui::app::App;
use crate::util::unicode::{display_width, pad_to_width, truncate_to_width};

/// Render the scrollable document of category sections and command cards.
///
/// The line structure produced here mirrors `DocLayout::build` row for row:
/// three header rows per section, `card_height` rows per card, one spacer
/// row per card, one gap row per section. The layout's spans are only valid
/// as long as that stays true.
pub fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let lines = build_document_lines(app, width);
    debug_assert_eq!(lines.len(), app.layout.total_rows);

    let top = app.scroll.min(lines.len());
    let bottom = (top + area.height as usize).min(lines.len());
    let window: Vec<Line> = lines[top..bottom].to_vec();

    let paragraph = Paragraph::new(Text::from(window))
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn build_document_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let highlighted = app.navigator.highlighted();
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(app.layout.total_rows);

    for category in app.catalog.categories() {
        // Section header: title, description, separator
        lines.push(Line::from(vec![
            Span::styled(
                "\u{25A0} ",
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                category.title.clone(),
                Style::default()
                    .fg(theme.text_bright)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", category.description),
            Style::default().fg(theme.dim),
        )));
        lines.push(Line::from(Span::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(theme.border),
        )));

        for item in &category.items {
            let is_highlighted = highlighted == Some(item.id.as_str());
            push_card_lines(&mut lines, app, item, width, is_highlighted);
            lines.push(Line::default()); // card spacer
        }

        lines.push(Line::default()); // section gap
    }

    lines
}

/// Push exactly `card_height(item)` lines for one command card
fn push_card_lines(
    lines: &mut Vec<Line<'static>>,
    app: &App,
    item: &Command,
    width: usize,
    highlighted: bool,
) {
    let theme = &app.theme;
    let card_bg = if highlighted {
        theme.highlight_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(card_bg);
    let marker = if highlighted {
        Span::styled("\u{258C}", Style::default().fg(theme.highlight_border).bg(card_bg))
    } else {
        Span::styled(" ", base)
    };

    // Header row: description left, shortcut badge right
    let badge = match (&item.shortcut, &item.cmd) {
        (Some(shortcut), _) => Some((
            format!("\u{524D}\u{7F00} + {}", shortcut), // 前缀 + X
            Style::default().fg(theme.kbd_fg).bg(card_bg),
        )),
        (None, Some(_)) => Some((
            "shell".to_string(),
            Style::default().fg(theme.dim).bg(card_bg),
        )),
        (None, None) => None,
    };
    let badge_width = badge.as_ref().map_or(0, |(b, _)| display_width(b) + 2);
    let desc_budget = width.saturating_sub(2 + badge_width);
    let description = truncate_to_width(&item.description, desc_budget);

    let mut header = vec![
        marker.clone(),
        Span::styled(" ", base),
        Span::styled(
            pad_to_width(&description, desc_budget),
            Style::default()
                .fg(theme.text_bright)
                .bg(card_bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some((text, style)) = badge {
        header.push(Span::styled("  ", base));
        header.push(Span::styled(text, style));
    }
    lines.push(Line::from(header));

    // One row per cmd line; only the first carries the prompt sigil
    if let Some(cmd) = &item.cmd {
        for (i, cmd_line) in cmd.lines().enumerate() {
            let sigil = if i == 0 { "$ " } else { "  " };
            lines.push(Line::from(vec![
                marker.clone(),
                Span::styled(format!(" {}", sigil), Style::default().fg(theme.dim).bg(card_bg)),
                Span::styled(
                    truncate_to_width(cmd_line, width.saturating_sub(4)),
                    Style::default().fg(theme.cmd_fg).bg(card_bg),
                ),
            ]));
        }
    }

    // Note row
    if let Some(note) = &item.note {
        lines.push(Line::from(vec![
            marker,
            Span::styled(" \u{00B7} ", Style::default().fg(theme.dim).bg(card_bg)),
            Span::styled(
                truncate_to_width(note, width.saturating_sub(4)),
                Style::default()
                    .fg(theme.dim)
                    .bg(card_bg)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }
}
