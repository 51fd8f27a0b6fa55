//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for consistent look across all pickers.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Thin outlines around swatches, bars and wheels
pub const BORDER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

/// Accent color (selected chooser buttons)
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

/// Option name text size
pub const FONT_SIZE_HEADER: f32 = 16.0;

/// Picker label text size
pub const FONT_SIZE_CONTENT: f32 = 14.0;

/// Tooltip text size
pub const FONT_SIZE_SMALL: f32 = 12.0;

// =============================================================================
// Buttons
// =============================================================================

/// Button background while the pointer hovers
pub const BUTTON_HOVER: Color = Color::new(0.196, 0.196, 0.235, 1.0); // ~50, 50, 60

/// Button background while held
pub const BUTTON_PRESSED: Color = Color::new(0.235, 0.235, 0.275, 1.0); // ~60, 60, 70

/// Icon color at rest
pub const ICON_COLOR: Color = Color::new(0.706, 0.706, 0.706, 1.0); // ~180

/// Icon color under the pointer
pub const ICON_HOVER: Color = Color::new(0.863, 0.863, 0.863, 1.0); // ~220

/// Icon color for disabled buttons
pub const ICON_DISABLED: Color = Color::new(0.3, 0.3, 0.33, 1.0);

// =============================================================================
// Color picker
// =============================================================================

/// Slider handle / wheel cursor
pub const HANDLE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Checkerboard behind translucent colors (light cells)
pub const CHECKER_LIGHT: Color = Color::new(0.8, 0.8, 0.8, 1.0);

/// Checkerboard behind translucent colors (dark cells)
pub const CHECKER_DARK: Color = Color::new(0.55, 0.55, 0.55, 1.0);

/// Tooltip background
pub const TOOLTIP_BG: Color = Color::new(0.176, 0.176, 0.196, 1.0); // ~45, 45, 50
