// Color themes for the TUI
//
// Themes are selected by name from config and can be cycled at runtime.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Resolve a config name (case-insensitive), falling back to Dark
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|k| *k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Resolved theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,

    pub selection: Color,
    pub selection_fg: Color,

    // Cards
    pub card_title: Color,
    pub tag: Color,
    pub card_id: Color,

    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_type: BorderType::Rounded,
            highlight: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Green,
            muted: Color::DarkGray,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,

            card_title: Color::LightBlue,
            tag: Color::Magenta,
            card_id: Color::Gray,

            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_type: BorderType::Plain,
            highlight: Color::Blue,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            muted: Color::Gray,

            selection: Color::LightBlue,
            selection_fg: Color::Black,

            card_title: Color::Blue,
            tag: Color::Rgb(184, 134, 11), // Dark goldenrod
            card_id: Color::DarkGray,

            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(216, 222, 233),
            border: Color::Rgb(76, 86, 106),
            border_type: BorderType::Rounded,
            highlight: Color::Rgb(136, 192, 208),
            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),
            muted: Color::Rgb(76, 86, 106),

            selection: Color::Rgb(67, 76, 94),
            selection_fg: Color::Rgb(235, 203, 139),

            card_title: Color::Rgb(129, 161, 193),
            tag: Color::Rgb(180, 142, 173),
            card_id: Color::Rgb(118, 128, 148),

            error: Color::Rgb(191, 97, 106),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(118, 128, 148),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ThemeKind::from_name("nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name(" Light "), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("Solarized"), ThemeKind::Dark);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
    }
}
