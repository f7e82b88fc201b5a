//! Color toggle for printer output.
//!
//! `ColorState` is a passthrough around `crossterm` styling: when enabled the
//! helpers wrap text in ANSI SGR sequences, when disabled they return the text
//! unchanged.

use crossterm::style::{style, Color, Stylize};

/// Whether styled output should carry ANSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorState {
    enabled: bool,
}

impl Default for ColorState {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ColorState {
    /// Create an enabled color state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a disabled color state.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Turn styling on.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Turn styling off.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Check if styling is on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Paint text with a foreground color.
    #[must_use]
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Bold text.
    #[must_use]
    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dimmed text.
    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }

    /// Red text.
    #[must_use]
    pub fn red(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    /// Green text.
    #[must_use]
    pub fn green(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    /// Yellow text.
    #[must_use]
    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    /// Blue text.
    #[must_use]
    pub fn blue(&self, text: &str) -> String {
        self.paint(text, Color::Blue)
    }

    /// Cyan text.
    #[must_use]
    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }
}
