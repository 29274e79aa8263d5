//! Theme configuration for all UI components.
//!
//! Unlike a fixed palette, the theme is switchable at runtime between dark
//! and light variants; render code takes the active [`Theme`] and never
//! hardcodes `Color::*` values.

pub mod persist;

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dark,
    Light,
}

/// Panel chrome shared by all panes
#[derive(Debug, Clone, Copy)]
pub struct PanelTheme {
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
}

/// Search input and result list
#[derive(Debug, Clone, Copy)]
pub struct SearchTheme {
    pub title: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub description: Color,
    pub selected_bg: Color,
    pub separator: Color,
    pub hint: Color,
    pub no_results: Color,
}

/// Navigation tree and table of contents
#[derive(Debug, Clone, Copy)]
pub struct NavTheme {
    pub group: Style,
    pub entry: Color,
    pub active: Style,
    pub cursor_bg: Color,
}

/// Content pane
#[derive(Debug, Clone, Copy)]
pub struct ContentTheme {
    pub heading: Style,
    pub body: Color,
}

#[derive(Debug, Clone, Copy)]
pub struct NotificationTheme {
    pub info_fg: Color,
    pub info_bg: Color,
    pub warning_fg: Color,
    pub warning_bg: Color,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: Mode,
    pub panel: PanelTheme,
    pub search: SearchTheme,
    pub nav: NavTheme,
    pub content: ContentTheme,
    pub notification: NotificationTheme,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: Mode::Dark,
            panel: PanelTheme {
                border_focused: Color::Rgb(0, 217, 255),
                border_unfocused: Color::Rgb(90, 92, 119),
                text: Color::Rgb(236, 236, 244),
                text_dim: Color::Rgb(90, 92, 119),
                background: Color::Rgb(26, 26, 46),
            },
            search: SearchTheme {
                title: Color::Rgb(236, 236, 244),
                badge_fg: Color::Rgb(26, 26, 46),
                badge_bg: Color::Rgb(0, 217, 255),
                description: Color::Rgb(130, 133, 158),
                selected_bg: Color::Rgb(55, 55, 85),
                separator: Color::Rgb(90, 92, 119),
                hint: Color::Rgb(130, 133, 158),
                no_results: Color::Rgb(224, 108, 117),
            },
            nav: NavTheme {
                group: Style::new()
                    .fg(Color::Rgb(0, 217, 255))
                    .add_modifier(Modifier::BOLD),
                entry: Color::Rgb(180, 182, 200),
                active: Style::new()
                    .fg(Color::Rgb(255, 217, 61))
                    .add_modifier(Modifier::BOLD),
                cursor_bg: Color::Rgb(45, 45, 72),
            },
            content: ContentTheme {
                heading: Style::new()
                    .fg(Color::Rgb(0, 217, 255))
                    .add_modifier(Modifier::BOLD),
                body: Color::Rgb(236, 236, 244),
            },
            notification: NotificationTheme {
                info_fg: Color::Rgb(236, 236, 244),
                info_bg: Color::Rgb(55, 55, 85),
                warning_fg: Color::Rgb(26, 26, 46),
                warning_bg: Color::Rgb(255, 217, 61),
            },
        }
    }

    pub fn light() -> Self {
        Self {
            mode: Mode::Light,
            panel: PanelTheme {
                border_focused: Color::Rgb(0, 95, 135),
                border_unfocused: Color::Rgb(160, 160, 170),
                text: Color::Rgb(40, 40, 50),
                text_dim: Color::Rgb(145, 145, 155),
                background: Color::Rgb(250, 250, 252),
            },
            search: SearchTheme {
                title: Color::Rgb(40, 40, 50),
                badge_fg: Color::Rgb(250, 250, 252),
                badge_bg: Color::Rgb(0, 95, 135),
                description: Color::Rgb(120, 120, 132),
                selected_bg: Color::Rgb(215, 227, 240),
                separator: Color::Rgb(160, 160, 170),
                hint: Color::Rgb(120, 120, 132),
                no_results: Color::Rgb(175, 50, 60),
            },
            nav: NavTheme {
                group: Style::new()
                    .fg(Color::Rgb(0, 95, 135))
                    .add_modifier(Modifier::BOLD),
                entry: Color::Rgb(70, 70, 82),
                active: Style::new()
                    .fg(Color::Rgb(150, 95, 0))
                    .add_modifier(Modifier::BOLD),
                cursor_bg: Color::Rgb(225, 232, 240),
            },
            content: ContentTheme {
                heading: Style::new()
                    .fg(Color::Rgb(0, 95, 135))
                    .add_modifier(Modifier::BOLD),
                body: Color::Rgb(40, 40, 50),
            },
            notification: NotificationTheme {
                info_fg: Color::Rgb(40, 40, 50),
                info_bg: Color::Rgb(225, 232, 240),
                warning_fg: Color::Rgb(40, 40, 50),
                warning_bg: Color::Rgb(250, 220, 120),
            },
        }
    }

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == Mode::Dark
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark_flag(!self.is_dark())
    }

    /// Mode label shown in the status bar. Must always agree with the
    /// active palette.
    pub fn indicator(&self) -> &'static str {
        match self.mode {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_flag() {
        assert!(Theme::from_dark_flag(true).is_dark());
        assert!(!Theme::from_dark_flag(false).is_dark());
    }

    #[test]
    fn test_toggle_flips_mode() {
        let theme = Theme::dark();
        assert!(!theme.toggled().is_dark());
        assert!(theme.toggled().toggled().is_dark());
    }

    #[test]
    fn test_indicator_matches_mode() {
        assert_eq!(Theme::dark().indicator(), "dark");
        assert_eq!(Theme::light().indicator(), "light");

        // The indicator is derived from the same field as the palette, so
        // any toggle sequence keeps them consistent
        let mut theme = Theme::light();
        for _ in 0..5 {
            theme = theme.toggled();
            let expected = if theme.is_dark() { "dark" } else { "light" };
            assert_eq!(theme.indicator(), expected);
        }
    }
}
