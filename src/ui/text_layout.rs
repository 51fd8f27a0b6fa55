//! Text layout adapter
//!
//! Widgets that show wrapped text go through [`TextLayout`] so they never
//! depend on a particular font or measurement backend. The contract is
//! stateful: [`TextLayout::layout`] computes and remembers a layout, and
//! [`TextLayout::draw_last_layout`] renders whatever was computed last.

use macroquad::prelude::*;

use super::{theme, Surface};

/// Wraps text to a pixel width and redraws the most recent layout
pub trait TextLayout {
    /// Wrap `text` to `wrap_width` pixels and return the height it occupies
    fn layout(&mut self, text: &str, wrap_width: f32) -> f32;

    /// Width of the widest line of the most recent layout
    fn last_width(&self) -> f32;

    /// Height of a single line of text
    fn line_height(&self) -> f32;

    /// Draw the most recent layout with its top-left corner at `(left, top)`
    ///
    /// Must be preceded by a call to [`TextLayout::layout`].
    fn draw_last_layout(&self, surface: &mut dyn Surface, left: f32, top: f32);
}

/// Measures the pixel width of a string at a font size
pub type MeasureFn = Box<dyn Fn(&str, f32) -> f32>;

/// Greedy word-wrapping layout over an injected measurement function
pub struct WrappingTextLayout {
    measure: MeasureFn,
    font_size: f32,
    line_height: f32,
    color: Color,
    lines: Vec<String>,
    width: f32,
}

impl WrappingTextLayout {
    pub fn new(measure: MeasureFn, font_size: f32, line_height: f32) -> Self {
        Self {
            measure,
            font_size,
            line_height,
            color: theme::TEXT_COLOR,
            lines: Vec::new(),
            width: 0.0,
        }
    }

    /// Layout backed by macroquad's default font
    ///
    /// Measurement needs a live macroquad context, so only construct this
    /// inside the window's frame loop.
    pub fn macroquad(font_size: f32) -> Self {
        Self::new(
            Box::new(|text, size| measure_text(text, None, size as u16, 1.0).width),
            font_size,
            (font_size * 1.25).round(),
        )
    }

    /// Lines produced by the most recent layout
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn text_width(&self, text: &str) -> f32 {
        (self.measure)(text, self.font_size)
    }

    /// Break a word that is wider than the wrap width at character boundaries
    fn push_long_word(&mut self, word: &str, wrap_width: f32, line: &mut String) {
        for ch in word.chars() {
            let mut candidate = line.clone();
            candidate.push(ch);
            if !line.is_empty() && self.text_width(&candidate) > wrap_width {
                self.lines.push(std::mem::take(line));
                line.push(ch);
            } else {
                *line = candidate;
            }
        }
    }

    fn wrap_paragraph(&mut self, paragraph: &str, wrap_width: f32) {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if self.text_width(&candidate) <= wrap_width {
                line = candidate;
                continue;
            }
            if !line.is_empty() {
                self.lines.push(std::mem::take(&mut line));
            }
            if self.text_width(word) <= wrap_width {
                line = word.to_string();
            } else {
                self.push_long_word(word, wrap_width, &mut line);
            }
        }
        self.lines.push(line);
    }
}

impl TextLayout for WrappingTextLayout {
    fn layout(&mut self, text: &str, wrap_width: f32) -> f32 {
        self.lines.clear();
        if !text.is_empty() {
            for paragraph in text.split('\n') {
                self.wrap_paragraph(paragraph, wrap_width);
            }
        }
        self.width = self
            .lines
            .iter()
            .map(|l| self.text_width(l))
            .fold(0.0, f32::max);
        self.lines.len() as f32 * self.line_height
    }

    fn last_width(&self) -> f32 {
        self.width
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn draw_last_layout(&self, surface: &mut dyn Surface, left: f32, top: f32) {
        for (i, line) in self.lines.iter().enumerate() {
            let y = top + i as f32 * self.line_height;
            surface.text(line, left, y, self.font_size, self.color);
        }
    }
}
