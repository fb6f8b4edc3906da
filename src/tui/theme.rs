//! Theme system for TUI colors and styles
//!
//! Priority colors match the CLI table output in `commands/mod.rs`.

use iocraft::prelude::Color;

use crate::types::PriorityColor;

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Priority colors
    pub priority_high: Color,
    pub priority_normal: Color,
    pub priority_low: Color,
    pub priority_unknown: Color,

    // Feedback colors
    pub error: Color,
    pub success: Color,

    // Stats
    pub stat_resolved: Color,
    pub stat_unresolved: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    /// Fill behind an open dialog
    pub backdrop: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            priority_high: Color::Red,
            priority_normal: Color::Rgb {
                r: 255,
                g: 165,
                b: 0,
            },
            priority_low: Color::Green,
            priority_unknown: GRAY,

            error: Color::Red,
            success: Color::Green,

            stat_resolved: Color::Green,
            stat_unresolved: Color::Yellow,

            // UI colors
            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            backdrop: Color::Rgb {
                r: 30,
                g: 30,
                b: 30,
            },
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the terminal color for a priority
    pub fn priority_color(&self, color: PriorityColor) -> Color {
        match color {
            PriorityColor::Red => self.priority_high,
            PriorityColor::Orange => self.priority_normal,
            PriorityColor::Green => self.priority_low,
            PriorityColor::Gray => self.priority_unknown,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
