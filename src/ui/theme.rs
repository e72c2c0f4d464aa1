//! Theme definitions for orgportal
//!
//! Provides three built-in themes: Gruvbox, Nord, and Transparent.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    pub accent: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Form inputs
    pub input_bg: Color,
    pub readonly: Color,

    // Notifications
    pub unread: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
}

impl Theme {
    /// Create a theme from a theme name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Gruvbox => Self::gruvbox(),
            ThemeName::Nord => Self::nord(),
            ThemeName::Transparent => Self::transparent(),
        }
    }

    /// Gruvbox dark theme (default)
    pub fn gruvbox() -> Self {
        Self {
            bg: Color::Rgb(40, 40, 40),        // #282828
            fg: Color::Rgb(235, 219, 178),     // #ebdbb2
            fg_dim: Color::Rgb(146, 131, 116), // #928374
            accent: Color::Rgb(254, 128, 25),  // #fe8019

            success: Color::Rgb(184, 187, 38), // #b8bb26
            warning: Color::Rgb(250, 189, 47), // #fabd2f
            error: Color::Rgb(251, 73, 52),    // #fb4934

            border: Color::Rgb(80, 73, 69),            // #504945
            border_focused: Color::Rgb(168, 153, 132), // #a89984
            selection_bg: Color::Rgb(80, 73, 69),
            selection_fg: Color::Rgb(235, 219, 178),

            input_bg: Color::Rgb(60, 56, 54),   // #3c3836
            readonly: Color::Rgb(124, 111, 100), // #7c6f64

            unread: Color::Rgb(131, 165, 152), // #83a598
            badge_bg: Color::Rgb(251, 73, 52),
            badge_fg: Color::Rgb(40, 40, 40),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),       // #2e3440
            fg: Color::Rgb(236, 239, 244),    // #eceff4
            fg_dim: Color::Rgb(76, 86, 106),  // #4c566a
            accent: Color::Rgb(136, 192, 208), // #88c0d0

            success: Color::Rgb(163, 190, 140), // #a3be8c
            warning: Color::Rgb(235, 203, 139), // #ebcb8b
            error: Color::Rgb(191, 97, 106),    // #bf616a

            border: Color::Rgb(59, 66, 82),              // #3b4252
            border_focused: Color::Rgb(136, 192, 208),
            selection_bg: Color::Rgb(76, 86, 106),
            selection_fg: Color::Rgb(236, 239, 244),

            input_bg: Color::Rgb(59, 66, 82),
            readonly: Color::Rgb(129, 161, 193), // #81a1c1

            unread: Color::Rgb(143, 188, 187), // #8fbcbb
            badge_bg: Color::Rgb(191, 97, 106),
            badge_fg: Color::Rgb(236, 239, 244),
        }
    }

    /// Transparent theme (uses terminal colors)
    pub fn transparent() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::Reset,
            fg_dim: Color::DarkGray,
            accent: Color::Cyan,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            border: Color::DarkGray,
            border_focused: Color::Cyan,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,

            input_bg: Color::Reset,
            readonly: Color::DarkGray,

            unread: Color::Cyan,
            badge_bg: Color::Red,
            badge_fg: Color::White,
        }
    }

    /// Background for blocks, drawn before borders and titles
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning).bg(self.bg)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Editable input, `active` when it has focus
    pub fn input(&self, active: bool) -> Style {
        let style = Style::default().fg(self.fg).bg(self.input_bg);
        if active {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    /// Field that cannot be edited (email, role)
    pub fn readonly(&self) -> Style {
        Style::default()
            .fg(self.readonly)
            .bg(self.bg)
            .add_modifier(Modifier::ITALIC)
    }

    /// Unread notification title
    pub fn unread(&self) -> Style {
        Style::default()
            .fg(self.unread)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Unread count badge on the bell
    pub fn badge(&self) -> Style {
        Style::default()
            .fg(self.badge_fg)
            .bg(self.badge_bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        let gruvbox = Theme::from_name(ThemeName::Gruvbox);
        assert_eq!(gruvbox.bg, Color::Rgb(40, 40, 40));

        let nord = Theme::from_name(ThemeName::Nord);
        assert_eq!(nord.bg, Color::Rgb(46, 52, 64));

        let transparent = Theme::from_name(ThemeName::Transparent);
        assert_eq!(transparent.bg, Color::Reset);
    }

    #[test]
    fn test_unread_distinct_from_read() {
        for name in [ThemeName::Gruvbox, ThemeName::Nord, ThemeName::Transparent] {
            let theme = Theme::from_name(name);
            assert_ne!(theme.unread(), theme.text());
        }
    }
}
