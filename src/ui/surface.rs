//! Draw targets
//!
//! Widgets never call the renderer directly; they draw through a [`Surface`]
//! so the same layout code runs against the macroquad window or a
//! recording surface in tests.

use macroquad::prelude::*;

use super::{fallback_text, Rect};

/// The drawing capabilities a widget needs
pub trait Surface {
    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Straight line between two points
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color);

    /// Single line of text with its top edge at `top`
    fn text(&mut self, text: &str, left: f32, top: f32, font_size: f32, color: Color);

    /// Icon glyph centered in `rect`
    fn icon(&mut self, glyph: char, rect: Rect, color: Color);
}

/// Surface that renders into the current macroquad frame
pub struct MacroquadSurface<'a> {
    icon_font: Option<&'a Font>,
}

impl<'a> MacroquadSurface<'a> {
    pub fn new(icon_font: Option<&'a Font>) -> Self {
        Self { icon_font }
    }
}

impl Surface for MacroquadSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color) {
        draw_line(x1, y1, x2, y2, thickness, color);
    }

    fn text(&mut self, text: &str, left: f32, top: f32, font_size: f32, color: Color) {
        // macroquad positions text by baseline
        let dims = measure_text(text, None, font_size as u16, 1.0);
        draw_text(text, left.round(), (top + dims.offset_y).round(), font_size, color);
    }

    fn icon(&mut self, glyph: char, rect: Rect, color: Color) {
        let size = rect.w.min(rect.h) * 0.75;
        match self.icon_font {
            Some(font) => {
                // Icon glyphs are roughly square, baseline at the bottom
                let x = rect.x + (rect.w - size) * 0.5;
                let y = rect.y + (rect.h + size) * 0.5;
                draw_text_ex(
                    &glyph.to_string(),
                    x.round(),
                    y.round(),
                    TextParams {
                        font: Some(font),
                        font_size: size as u16,
                        color,
                        ..Default::default()
                    },
                );
            }
            None => {
                let text = fallback_text(glyph);
                let dims = measure_text(text, None, size as u16, 1.0);
                let x = rect.x + (rect.w - dims.width) * 0.5;
                let y = rect.y + (rect.h - dims.height) * 0.5 + dims.offset_y;
                draw_text(text, x.round(), y.round(), size, color);
            }
        }
    }
}
