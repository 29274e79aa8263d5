use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Clear, Paragraph},
};

use crate::theme::Theme;

use super::notification_state::{NotificationKind, NotificationState};

/// Render the active notification as a single-line overlay in the top-right
/// corner of `area`.
pub fn render(
    state: &mut NotificationState,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(notification) = state.active() else {
        return;
    };

    let (fg, bg) = match notification.kind {
        NotificationKind::Info => (theme.notification.info_fg, theme.notification.info_bg),
        NotificationKind::Warning => (
            theme.notification.warning_fg,
            theme.notification.warning_bg,
        ),
    };

    let text = format!(" {} ", notification.message);
    let width = (text.chars().count() as u16).min(area.width);
    let overlay = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1.min(area.height),
    };

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Paragraph::new(Line::from(text)).style(Style::default().fg(fg).bg(bg)),
        overlay,
    );
}
