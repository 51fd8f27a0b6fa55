//! 8-bit RGBA colors and HSV/HSL conversions

use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

/// A color with four 0-255 channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Color channel index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
    pub const RGBA: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    pub fn letter(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::Alpha => "A",
        }
    }
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
            Channel::Alpha => self.a = value,
        }
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_color(self) -> Color {
        Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Map a 0.0-1.0 fraction onto 0-255, clamping out-of-range input
pub fn unit_to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn channel_to_unit(c: u8) -> f32 {
    c as f32 / 255.0
}

/// Hue (0-360), saturation and value (0-1)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Hue (0-360), saturation and lightness (0-1)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Hue in degrees plus (max, min, delta) of the unit RGB channels
fn hue_and_range(c: Rgba8) -> (f32, f32, f32, f32) {
    let (r, g, b) = (channel_to_unit(c.r), channel_to_unit(c.g), channel_to_unit(c.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    (h, max, min, delta)
}

/// Unit RGB from hue, chroma and the amount added to every channel
fn from_chroma(h: f32, chroma: f32, m: f32, a: u8) -> Rgba8 {
    let h = h.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Rgba8::new(unit_to_channel(r + m), unit_to_channel(g + m), unit_to_channel(b + m), a)
}

impl Hsv {
    pub fn from_rgba(c: Rgba8) -> Self {
        let (h, max, _, delta) = hue_and_range(c);
        let s = if max == 0.0 { 0.0 } else { delta / max };
        Self { h, s, v: max }
    }

    pub fn to_rgba(self, a: u8) -> Rgba8 {
        let chroma = self.v * self.s;
        from_chroma(self.h, chroma, self.v - chroma, a)
    }
}

impl Hsl {
    pub fn from_rgba(c: Rgba8) -> Self {
        let (h, max, min, delta) = hue_and_range(c);
        let l = (max + min) * 0.5;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        Self { h, s: s.clamp(0.0, 1.0), l }
    }

    pub fn to_rgba(self, a: u8) -> Rgba8 {
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        from_chroma(self.h, chroma, self.l - chroma * 0.5, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Hsv::from_rgba(Rgba8::rgb(255, 0, 0)).h, 0.0);
        assert_eq!(Hsv::from_rgba(Rgba8::rgb(0, 255, 0)).h, 120.0);
        assert_eq!(Hsv::from_rgba(Rgba8::rgb(0, 0, 255)).h, 240.0);
    }

    #[test]
    fn test_hsv_known_values() {
        let hsv = Hsv::from_rgba(Rgba8::rgb(255, 128, 0));
        assert!((hsv.h - 30.1).abs() < 0.2);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
        assert_eq!(Hsv { h: 180.0, s: 1.0, v: 1.0 }.to_rgba(255), Rgba8::rgb(0, 255, 255));
        assert_eq!(Hsv { h: 0.0, s: 0.0, v: 0.5 }.to_rgba(10), Rgba8::new(128, 128, 128, 10));
    }

    #[test]
    fn test_hsl_known_values() {
        assert_eq!(Hsl { h: 0.0, s: 1.0, l: 0.5 }.to_rgba(255), Rgba8::rgb(255, 0, 0));
        assert_eq!(Hsl { h: 240.0, s: 1.0, l: 0.25 }.to_rgba(255), Rgba8::rgb(0, 0, 128));
        assert_eq!(Hsl { h: 77.0, s: 0.3, l: 1.0 }.to_rgba(255), Rgba8::rgb(255, 255, 255));
        let hsl = Hsl::from_rgba(Rgba8::rgb(0, 0, 128));
        assert_eq!(hsl.h, 240.0);
        assert_eq!(hsl.s, 1.0);
    }

    #[test]
    fn test_conversions_preserve_color() {
        let samples = [
            Rgba8::rgb(138, 43, 226),
            Rgba8::rgb(102, 205, 170),
            Rgba8::rgb(244, 164, 96),
            Rgba8::rgb(34, 139, 34),
            Rgba8::rgb(0, 0, 0),
            Rgba8::rgb(255, 255, 255),
        ];
        for c in samples {
            assert_eq!(Hsv::from_rgba(c).to_rgba(255), c, "hsv {c:?}");
            assert_eq!(Hsl::from_rgba(c).to_rgba(255), c, "hsl {c:?}");
        }
    }

    #[test]
    fn test_unit_to_channel_clamps() {
        assert_eq!(unit_to_channel(-0.5), 0);
        assert_eq!(unit_to_channel(1.5), 255);
        assert_eq!(unit_to_channel(0.5), 128);
    }

    #[test]
    fn test_channel_accessors() {
        let mut c = Rgba8::rgb(1, 2, 3);
        c.set(Channel::Alpha, 9);
        assert_eq!(c.get(Channel::Alpha), 9);
        assert_eq!(c.get(Channel::Green), 2);
    }
}
