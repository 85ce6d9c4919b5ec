//! Terminal capability detection and utilities

use owo_colors::{OwoColorize, colors::css};

/// Terminals narrower than this get the compact listing.
const NARROW_WIDTH: u16 = 60;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow, treating an unknown width as wide
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < NARROW_WIDTH)
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Success,
    Warning,
    Heading,
    Dim,
}

fn paint(text: &str, style: Style) -> String {
    if !supports_color() {
        return text.to_string();
    }
    match style {
        Style::Success => text.fg::<css::Green>().to_string(),
        Style::Warning => text.fg::<css::Orange>().to_string(),
        Style::Heading => text.fg::<css::LightBlue>().bold().to_string(),
        Style::Dim => text.dimmed().to_string(),
    }
}

/// Extension trait for colorizing output
pub trait Colorize: AsRef<str> {
    /// Color as success (green)
    fn success(&self) -> String {
        paint(self.as_ref(), Style::Success)
    }

    /// Color as warning (amber)
    fn warning(&self) -> String {
        paint(self.as_ref(), Style::Warning)
    }

    /// Color as a heading (bold blue)
    fn heading(&self) -> String {
        paint(self.as_ref(), Style::Heading)
    }

    /// Dim the text
    fn dim(&self) -> String {
        paint(self.as_ref(), Style::Dim)
    }
}

impl Colorize for str {}

impl Colorize for String {}
