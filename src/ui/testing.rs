//! Headless drawing helpers for widget tests

use macroquad::prelude::Color;

use super::{Rect, Surface, WrappingTextLayout};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill(Rect, Color),
    Stroke(Rect),
    Line(f32, f32, f32, f32),
    Text { text: String, left: f32, top: f32 },
    Icon { glyph: char, rect: Rect },
}

/// Surface that records every call instead of rendering
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icons(&self) -> Vec<(char, Rect)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Icon { glyph, rect } => Some((*glyph, *rect)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(String, f32, f32)> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, left, top } => Some((text.clone(), *left, *top)),
                _ => None,
            })
            .collect()
    }

    /// Rectangles filled with exactly `color`
    pub fn fills_of(&self, color: Color) -> Vec<Rect> {
        self.cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Fill(rect, fill) if *fill == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::Fill(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, _thickness: f32, _color: Color) {
        self.cmds.push(DrawCmd::Stroke(rect));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _thickness: f32, _color: Color) {
        self.cmds.push(DrawCmd::Line(x1, y1, x2, y2));
    }

    fn text(&mut self, text: &str, left: f32, top: f32, _font_size: f32, _color: Color) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            left,
            top,
        });
    }

    fn icon(&mut self, glyph: char, rect: Rect, _color: Color) {
        self.cmds.push(DrawCmd::Icon { glyph, rect });
    }
}

/// Monospace layout: 8px per character, 16px per line
pub fn fixed_text_layout() -> WrappingTextLayout {
    WrappingTextLayout::new(Box::new(|text, _| text.chars().count() as f32 * 8.0), 14.0, 16.0)
}
