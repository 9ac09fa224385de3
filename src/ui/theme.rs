//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::block::BorderType;
use ratatui::widgets::{Block, Borders};

use crate::config::ThemeMode;
use crate::sim::{Status, Tone};

/// Color and style theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Secondary accent used for brand text and gauges.
    pub accent: Color,
    pub healthy: Color,
    pub warning: Color,
    pub degraded: Color,
    pub critical: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    /// Muted text such as captions.
    pub muted: Style,
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Green,
            accent: Color::Cyan,
            healthy: Color::Green,
            warning: Color::Yellow,
            degraded: Color::LightRed,
            critical: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            muted: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            accent: Color::Magenta,
            healthy: Color::Green,
            warning: Color::Yellow,
            degraded: Color::LightRed,
            critical: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            muted: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::auto_detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Get style for a color band
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Healthy => Style::default().fg(self.healthy),
            Tone::Warning => Style::default().fg(self.warning),
            Tone::Degraded => Style::default().fg(self.degraded),
            Tone::Critical => Style::default().fg(self.critical).add_modifier(Modifier::BOLD),
        }
    }

    pub fn status_style(&self, status: Status) -> Style {
        self.tone_style(status.tone())
    }

    /// Bordered block with the theme's border settings.
    pub fn block<'a>(&self, title: impl Into<Line<'a>>) -> Block<'a> {
        let title: Line<'a> = title.into();
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(self.border_type)
            .border_style(Style::default().fg(self.border))
    }
}
