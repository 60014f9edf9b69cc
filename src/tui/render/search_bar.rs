use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::search::MatchField;
use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

/// Render the fixed search header: prompt row plus separator. It sits
/// outside the scroll area, so scrolling never hides it.
pub fn render_search_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let width = area.width as usize;

    let prompt = match app.mode {
        Mode::Search => Line::from(vec![
            Span::styled(" / ", Style::default().fg(theme.accent)),
            Span::styled(
                app.search_input.clone(),
                Style::default().fg(theme.text_bright),
            ),
            Span::styled("\u{258C}", Style::default().fg(theme.accent)), // cursor
        ]),
        Mode::Navigate => Line::from(vec![
            Span::styled(" / ", Style::default().fg(theme.dim)),
            Span::styled(
                "\u{641C}\u{7D22}\u{547D}\u{4EE4} (\u{4F8B}\u{5982}\u{FF1A}'\u{5206}\u{5C4F}', 'detach')", // 搜索命令 (例如：'分屏', 'detach')
                Style::default().fg(theme.dim),
            ),
        ]),
    };

    let header_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(prompt).style(Style::default().bg(theme.background)),
        header_area,
    );

    let sep_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(theme.border),
        ))
        .style(Style::default().bg(theme.background)),
        sep_area,
    );
}

/// Render the results dropdown floating over the content pane. Only called
/// while a non-blank query is live; an empty result set shows a "no matches"
/// panel rather than nothing.
pub fn render_results_dropdown(frame: &mut Frame, app: &App, content_area: Rect) {
    let theme = &app.theme;
    let results = app.results();

    let width = content_area.width.saturating_sub(4).min(56).max(20);
    let inner_rows = results.len().max(1) as u16;
    let height = (inner_rows + 2).min(content_area.height);
    // Narrow terminals: never draw outside the content pane
    let area = Rect {
        x: content_area.x + 1,
        y: content_area.y,
        width,
        height,
    }
    .intersection(content_area);
    if area.is_empty() {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface));

    let mut lines: Vec<Line> = Vec::new();
    if results.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(
                "\u{672A}\u{627E}\u{5230}\u{4E0E} \"{}\" \u{76F8}\u{5173}\u{7684}\u{547D}\u{4EE4}", // 未找到与 "…" 相关的命令
                truncate_to_width(app.search_input.trim(), area.width.saturating_sub(16) as usize)
            ),
            Style::default().fg(theme.dim),
        )));
    } else {
        let inner_width = area.width.saturating_sub(2) as usize;
        for (i, hit) in results.iter().enumerate() {
            let selected = i == app.result_cursor;
            let row_bg = if selected {
                theme.selection_bg
            } else {
                theme.surface
            };
            let marker = if selected { "\u{25B8} " } else { "  " };

            // Subtitle: the shortcut if present, else the command line,
            // else the matched field label
            let subtitle = if let Some(shortcut) = &hit.command.shortcut {
                format!("\u{524D}\u{7F00} + {}", shortcut) // 前缀 + X
            } else if let Some(cmd) = &hit.command.cmd {
                cmd.lines().next().unwrap_or("").to_string()
            } else {
                hit.field.label().to_string()
            };
            let subtitle_style = match hit.field {
                MatchField::Cmd => Style::default().fg(theme.cmd_fg).bg(row_bg),
                _ => Style::default().fg(theme.dim).bg(row_bg),
            };

            let desc_budget = inner_width.saturating_sub(4);
            lines.push(Line::from(vec![
                Span::styled(
                    marker,
                    Style::default().fg(theme.accent).bg(row_bg),
                ),
                Span::styled(
                    truncate_to_width(&hit.command.description, desc_budget / 2),
                    Style::default()
                        .fg(if selected {
                            theme.text_bright
                        } else {
                            theme.text
                        })
                        .bg(row_bg)
                        .add_modifier(if selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                ),
                Span::styled("  ", Style::default().bg(row_bg)),
                Span::styled(
                    truncate_to_width(&subtitle, desc_budget / 2),
                    subtitle_style,
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    frame.render_widget(paragraph, area);
}
