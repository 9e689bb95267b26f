//! Color theme constants for the dashboard.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Titles and highlighted values
pub const COLOR_ACCENT: Color = Color::White;

/// Header brand text
pub const COLOR_HEADER: Color = Color::Cyan;

/// Secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

pub const COLOR_ERROR: Color = Color::Red;

/// Scheduled posts and the calendar
pub const COLOR_SCHEDULED: Color = Color::Yellow;

/// AI suggestions
pub const COLOR_AI: Color = Color::Magenta;

/// Background of floating controls and toasts
pub const COLOR_OVERLAY_BG: Color = Color::Rgb(10, 15, 35);
