//! Navigation pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

use super::nav_state::NavRow;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = app.theme;
    let focused = app.focus == Focus::NavPane;

    let border = if focused {
        theme.panel.border_focused
    } else {
        theme.panel.border_unfocused
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Navigation ")
        .border_style(Style::default().fg(border));

    let viewport_height = area.height.saturating_sub(2);
    let rows = app.nav.rows();
    app.nav
        .scroll
        .update_bounds(rows.len() as u32, viewport_height);
    // Startup positioning once the bounds are known
    if let Some(row) = app.nav.take_pending_center() {
        app.nav.scroll.center_on(row);
    }

    let active = app.nav.active_toc();
    let cursor = app.nav.cursor();

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let line = match *row {
            NavRow::Group(g) => {
                let marker = if app.nav.is_open(g) { "▾" } else { "▸" };
                let title = app.nav.group_title(g).unwrap_or("");
                Line::from(Span::styled(
                    format!("{} {}", marker, title),
                    theme.nav.group,
                ))
            }
            NavRow::Entry(g, e) => {
                let title = app
                    .nav
                    .entry(g, e)
                    .map(|entry| entry.title.as_str())
                    .unwrap_or("");
                if g == 0 && active == Some(e) {
                    Line::from(Span::styled(format!("  › {}", title), theme.nav.active))
                } else {
                    Line::from(Span::styled(
                        format!("    {}", title),
                        Style::default().fg(theme.nav.entry),
                    ))
                }
            }
        };

        if focused && i == cursor {
            lines.push(line.style(Style::default().bg(theme.nav.cursor_bg)));
        } else {
            lines.push(line);
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.nav.scroll.offset, 0));
    frame.render_widget(paragraph, area);
}
