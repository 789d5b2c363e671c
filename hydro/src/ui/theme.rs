//! Color theme and styling for the Hydro Freaks TUI

use ratatui::style::{Color, Modifier, Style};

/// Game UI color theme
#[derive(Debug, Clone)]
pub struct GameTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Stage colors
    pub egg: Color,
    pub hatchling: Color,
    pub grown: Color,
    pub final_form: Color,

    // Text colors
    pub title: Color,
    pub input_text: Color,
    pub system_text: Color,
    pub locked: Color,
    pub highlight: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            egg: Color::Gray,
            hatchling: Color::LightBlue,
            grown: Color::Cyan,
            final_form: Color::LightMagenta,

            title: Color::LightCyan,
            input_text: Color::Cyan,
            system_text: Color::DarkGray,
            locked: Color::DarkGray,
            highlight: Color::Yellow,
        }
    }
}

impl GameTheme {
    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for the typed input
    pub fn input_style(&self) -> Style {
        Style::default()
            .fg(self.input_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for system messages
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get freak art color for a stage
    pub fn stage_color(&self, stage: u8) -> Color {
        match stage {
            0 => self.egg,
            1 => self.hatchling,
            2 => self.grown,
            _ => self.final_form,
        }
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Get title style
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for a selectable row
    pub fn row_style(&self, unlocked: bool, highlighted: bool) -> Style {
        let style = Style::default().fg(if unlocked {
            self.foreground
        } else {
            self.locked
        });

        if highlighted {
            style.fg(self.highlight).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
