//! Lucide icon support
//!
//! Uses the Lucide icon font for crisp vector icons at any size. When the
//! font could not be loaded, icons fall back to a short ASCII stand-in.

/// Lucide icon codepoints
pub mod icon {
    // Navigation
    pub const CHEVRON_LEFT: char = '\u{e06f}';
    pub const CHEVRON_RIGHT: char = '\u{e070}';

    // Color picker styles
    pub const PALETTE: char = '\u{e12f}'; // RGB sliders
    pub const SUN: char = '\u{e178}';     // HSV wheel
    pub const BLEND: char = '\u{e59c}';   // HSL wheel
}

/// ASCII text to draw in place of an icon glyph when no icon font is loaded
pub fn fallback_text(glyph: char) -> &'static str {
    match glyph {
        icon::CHEVRON_LEFT => "<",
        icon::CHEVRON_RIGHT => ">",
        icon::PALETTE => "RGB",
        icon::SUN => "HSV",
        icon::BLEND => "HSL",
        _ => "?",
    }
}

/// An icon glyph together with the pixel footprint it is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSource {
    pub glyph: char,
    pub w: f32,
    pub h: f32,
}

impl IconSource {
    pub const fn new(glyph: char, w: f32, h: f32) -> Self {
        Self { glyph, w, h }
    }
}

/// Left navigation arrow
pub const LEFT_ARROW: IconSource = IconSource::new(icon::CHEVRON_LEFT, 24.0, 22.0);

/// Right navigation arrow
pub const RIGHT_ARROW: IconSource = IconSource::new(icon::CHEVRON_RIGHT, 24.0, 22.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_text() {
        assert_eq!(fallback_text(icon::CHEVRON_LEFT), "<");
        assert_eq!(fallback_text(icon::CHEVRON_RIGHT), ">");
        assert_eq!(fallback_text('x'), "?");
    }
}
