//! Color theme constants for the feed UI.

use ratatui::style::Color;

/// Border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and titles
pub const COLOR_ACCENT: Color = Color::White;

/// Source badge and active region
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Less important info (URLs, hints, disabled buttons)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error line
pub const COLOR_ERROR: Color = Color::Rgb(220, 80, 80);

/// Loading indicator
pub const COLOR_LOADING: Color = Color::Rgb(0, 122, 204);

/// Background of the highlighted article
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 30, 45);
