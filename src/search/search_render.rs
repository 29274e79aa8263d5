//! Search panel rendering
//!
//! The input box with its platform shortcut hint, and the grouped result
//! list: module results first, a separator, then page results.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Platform label for the focus-search shortcut
fn modifier_key_prefix() -> &'static str {
    if cfg!(target_os = "macos") { "⌘" } else { "Ctrl" }
}

pub fn render_input(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = app.theme;
    let focused = app.focus == Focus::SearchInput;

    let border = if focused {
        theme.panel.border_focused
    } else {
        theme.panel.border_unfocused
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(Style::default().fg(border));

    // The shortcut hint hides while the input has focus and reappears on
    // blur
    if !focused {
        block = block.title(
            Line::from(vec![
                Span::styled(
                    modifier_key_prefix(),
                    Style::default().fg(theme.search.hint),
                ),
                Span::styled(" K ", Style::default().fg(theme.search.hint)),
            ])
            .right_aligned(),
        );
    }

    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let textarea = app.search.textarea_mut();
    textarea.set_block(block);
    textarea.set_cursor_style(cursor_style);
    frame.render_widget(&*textarea, area);
}

pub fn render_results(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = app.theme;

    let viewport_height = area.height.saturating_sub(2);
    let row_count = app.search.display_row_count();
    app.search
        .scroll
        .update_bounds(row_count as u32, viewport_height);

    let set = app.search.results();
    let selected = app.search.selected();

    let title = Line::from(Span::styled(
        format!(" {} results ", set.len()),
        Style::default().fg(theme.panel.text),
    ));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.panel.border_unfocused));

    let separator_width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, result) in set.results.iter().enumerate() {
        if set.has_separator() && i == set.module_count {
            lines.push(separator_line(separator_width, theme.search.separator));
        }

        let mut spans = vec![Span::styled(
            result.title.clone(),
            Style::default().fg(theme.search.title),
        )];
        if let Some(badge) = &result.badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", badge),
                Style::default()
                    .fg(theme.search.badge_fg)
                    .bg(theme.search.badge_bg),
            ));
        }
        if let Some(description) = &result.description {
            spans.push(Span::styled(
                format!("  {}", description),
                Style::default()
                    .fg(theme.search.description)
                    .add_modifier(Modifier::DIM),
            ));
        }

        let mut line = Line::from(spans);
        if selected == Some(i) {
            line = line.style(Style::default().bg(theme.search.selected_bg));
        }
        lines.push(line);
    }
    // Separator still renders when modules matched but no page result
    // followed
    if set.has_separator() && set.module_count == set.len() {
        lines.push(separator_line(separator_width, theme.search.separator));
    }
    if set.is_empty() {
        lines.push(Line::from(Span::styled(
            "No matches",
            Style::default().fg(theme.search.no_results),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.search.scroll.offset, 0));
    frame.render_widget(paragraph, area);
}

fn separator_line(width: usize, color: ratatui::style::Color) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(color),
    ))
}
