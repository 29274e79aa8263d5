use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Focus};
use crate::nav::nav_render;
use crate::notification::notification_render;
use crate::search::search_render;

const SIDEBAR_WIDTH: u16 = 34;
const SEARCH_INPUT_HEIGHT: u16 = 3;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
        let main = chunks[0];
        let status = chunks[1];

        let content_area = if self.nav.visible {
            let columns =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                    .split(main);
            self.render_sidebar(frame, columns[0]);
            columns[1]
        } else {
            main
        };

        self.render_content(frame, content_area);
        self.render_status_line(frame, status);

        let theme = self.theme;
        notification_render::render(&mut self.notification, &theme, frame, content_area);
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(1),
        ])
        .split(area);

        search_render::render_input(self, frame, chunks[0]);

        // Search results replace the navigation tree while the panel is
        // active
        if self.search.is_visible() {
            search_render::render_results(self, frame, chunks[1]);
        } else {
            nav_render::render(self, frame, chunks[1]);
        }
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let focused = self.focus == Focus::ContentPane;

        let viewport_height = area.height.saturating_sub(2);
        self.content
            .scroll
            .update_bounds(self.content.line_count(), viewport_height);

        let border = if focused {
            theme.panel.border_focused
        } else {
            theme.panel.border_unfocused
        };
        let title = if self.content.title.is_empty() {
            " Documentation ".to_string()
        } else {
            format!(" {} ", self.content.title)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border));

        let lines: Vec<Line> = self
            .content
            .lines()
            .iter()
            .map(|line| {
                if line.heading {
                    Line::from(Span::styled(line.text.clone(), theme.content.heading))
                } else {
                    Line::from(Span::styled(
                        line.text.clone(),
                        Style::default().fg(theme.content.body),
                    ))
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.content.scroll.offset, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_status_line(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;

        let hints: &[(&str, &str)] = &[
            ("/", "search"),
            ("Tab", "focus"),
            ("^T", "theme"),
            ("^N", "nav"),
            ("y", "copy"),
            ("q", "quit"),
        ];

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, description)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    "• ",
                    Style::default()
                        .fg(theme.panel.text_dim)
                        .add_modifier(Modifier::DIM),
                ));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(theme.panel.text_dim),
            ));
            spans.push(Span::styled(
                format!(" {} ", description),
                Style::default()
                    .fg(theme.panel.text_dim)
                    .add_modifier(Modifier::DIM),
            ));
        }

        // Right-aligned theme indicator, padded into the same line
        let indicator = format!("● {} ", self.theme.indicator());
        let hints_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let pad = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(indicator.chars().count());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(
            indicator,
            Style::default().fg(theme.panel.text_dim),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
