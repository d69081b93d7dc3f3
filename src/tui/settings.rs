//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, glyphs, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_TEXT: &str = "Enter todo text: ";

// ---------------------------------------------------------------------------
// List rendering
// ---------------------------------------------------------------------------

pub const BANNER: &str = "********** TODO LIST **********";
pub const MARK_DONE: &str = "[x]";
pub const MARK_OPEN: &str = "[ ]";

// ---------------------------------------------------------------------------
// Status labels
// ---------------------------------------------------------------------------

pub const LABEL_WRITE_ERROR: &str = "Error writing to file:";
pub const LABEL_READ_ERROR: &str = "Error reading file:";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub fn color_banner() -> Color {
    Color::Cyan
}

pub fn color_prompt() -> Color {
    Color::White
}

pub fn color_mark_done() -> Color {
    Color::Green
}

pub fn color_mark_open() -> Color {
    Color::DarkGrey
}

pub fn color_warning() -> Color {
    Color::Yellow
}

pub fn color_error() -> Color {
    Color::Red
}
