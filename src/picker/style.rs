//! Color picker style selection
//!
//! Internally the enabled styles are a [`StyleSet`] and the chooser is a
//! [`Chooser`]. The packed `u32` form exists only for callers that pass
//! options through a primitive-typed API:
//!
//! | bits  | meaning                                         |
//! |-------|-------------------------------------------------|
//! | 0     | RGB sliders                                     |
//! | 1     | HSV color wheel                                 |
//! | 2     | HSL color wheel                                 |
//! | 3-7   | reserved, ignored                               |
//! | 8-9   | chooser: 0 none, 1 radio, 2 toggle              |

use crate::ui::{icon, IconSource};

pub const RGB_SLIDERS: u32 = 0b0000_0001;
pub const HSV_COLOR_WHEEL: u32 = 0b0000_0010;
pub const HSL_COLOR_WHEEL: u32 = 0b0000_0100;
pub const ALL_STYLES: u32 = 0b1111_1111;
pub const NO_CHOOSER: u32 = 0;
pub const RADIO_CHOOSER: u32 = 0b01 << 8;
pub const TOGGLE_CHOOSER: u32 = 0b10 << 8;

/// One way of editing a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerStyle {
    RgbSliders,
    HsvWheel,
    HslWheel,
}

impl PickerStyle {
    /// Every style, in display order
    pub const ALL: [PickerStyle; 3] = [PickerStyle::RgbSliders, PickerStyle::HsvWheel, PickerStyle::HslWheel];

    fn bit(self) -> u32 {
        match self {
            PickerStyle::RgbSliders => RGB_SLIDERS,
            PickerStyle::HsvWheel => HSV_COLOR_WHEEL,
            PickerStyle::HslWheel => HSL_COLOR_WHEEL,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PickerStyle::RgbSliders => "RGB sliders",
            PickerStyle::HsvWheel => "HSV color wheel",
            PickerStyle::HslWheel => "HSL color wheel",
        }
    }

    /// Chooser button icon
    pub fn icon(self) -> IconSource {
        let glyph = match self {
            PickerStyle::RgbSliders => icon::PALETTE,
            PickerStyle::HsvWheel => icon::SUN,
            PickerStyle::HslWheel => icon::BLEND,
        };
        IconSource::new(glyph, 24.0, 22.0)
    }
}

/// A set of picker styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSet {
    mask: u8,
}

impl StyleSet {
    pub const fn empty() -> Self {
        Self { mask: 0 }
    }

    pub fn all() -> Self {
        PickerStyle::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, style: PickerStyle) {
        self.mask |= style.bit() as u8;
    }

    pub fn remove(&mut self, style: PickerStyle) {
        self.mask &= !(style.bit() as u8);
    }

    pub fn contains(&self, style: PickerStyle) -> bool {
        self.mask & style.bit() as u8 != 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Styles in display order
    pub fn iter(&self) -> impl Iterator<Item = PickerStyle> {
        let set = *self;
        PickerStyle::ALL.into_iter().filter(move |s| set.contains(*s))
    }

    pub fn first(&self) -> Option<PickerStyle> {
        self.iter().next()
    }
}

impl FromIterator<PickerStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = PickerStyle>>(iter: I) -> Self {
        let mut set = StyleSet::empty();
        for style in iter {
            set.insert(style);
        }
        set
    }
}

/// How the user switches between several enabled styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chooser {
    /// Every enabled style is shown at once
    #[default]
    None,
    /// Exactly one style is shown, picked from a row of buttons
    Radio,
    /// Each style can be shown or hidden independently
    Toggle,
}

/// Complete style configuration of a color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPickerStyle {
    pub styles: StyleSet,
    pub chooser: Chooser,
}

impl Default for ColorPickerStyle {
    fn default() -> Self {
        Self::from_bits(0)
    }
}

impl ColorPickerStyle {
    /// Decode the packed form; no style bits means RGB sliders only
    pub fn from_bits(bits: u32) -> Self {
        let mut styles: StyleSet = PickerStyle::ALL
            .into_iter()
            .filter(|s| bits & s.bit() != 0)
            .collect();
        if styles.is_empty() {
            styles.insert(PickerStyle::RgbSliders);
        }
        let chooser = if bits & RADIO_CHOOSER != 0 {
            Chooser::Radio
        } else if bits & TOGGLE_CHOOSER != 0 {
            Chooser::Toggle
        } else {
            Chooser::None
        };
        Self { styles, chooser }
    }

    pub fn to_bits(&self) -> u32 {
        let styles = self.styles.iter().fold(0, |acc, s| acc | s.bit());
        let chooser = match self.chooser {
            Chooser::None => NO_CHOOSER,
            Chooser::Radio => RADIO_CHOOSER,
            Chooser::Toggle => TOGGLE_CHOOSER,
        };
        styles | chooser
    }

    /// Whether a chooser row is drawn at all
    pub fn shows_chooser(&self) -> bool {
        self.chooser != Chooser::None && self.styles.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rgb_sliders() {
        let style = ColorPickerStyle::from_bits(0);
        assert_eq!(style.styles.iter().collect::<Vec<_>>(), vec![PickerStyle::RgbSliders]);
        assert_eq!(style.chooser, Chooser::None);
        assert!(!style.shows_chooser());
    }

    #[test]
    fn test_all_styles_ignores_reserved_bits() {
        let style = ColorPickerStyle::from_bits(ALL_STYLES | RADIO_CHOOSER);
        assert_eq!(style.styles, StyleSet::all());
        assert_eq!(style.chooser, Chooser::Radio);
        assert_eq!(style.to_bits(), 0b111 | RADIO_CHOOSER);
    }

    #[test]
    fn test_radio_wins_over_toggle() {
        let style = ColorPickerStyle::from_bits(ALL_STYLES | RADIO_CHOOSER | TOGGLE_CHOOSER);
        assert_eq!(style.chooser, Chooser::Radio);
    }

    #[test]
    fn test_single_style_hides_chooser() {
        let style = ColorPickerStyle::from_bits(HSV_COLOR_WHEEL | TOGGLE_CHOOSER);
        assert_eq!(style.styles.len(), 1);
        assert_eq!(style.chooser, Chooser::Toggle);
        assert!(!style.shows_chooser());
    }

    #[test]
    fn test_bits_round_trip() {
        for bits in [RGB_SLIDERS, HSL_COLOR_WHEEL | TOGGLE_CHOOSER, 0b110 | RADIO_CHOOSER] {
            assert_eq!(ColorPickerStyle::from_bits(bits).to_bits(), bits);
        }
    }

    #[test]
    fn test_style_set_ops() {
        let mut set = StyleSet::empty();
        set.insert(PickerStyle::HslWheel);
        set.insert(PickerStyle::RgbSliders);
        assert_eq!(set.first(), Some(PickerStyle::RgbSliders));
        assert_eq!(set.len(), 2);
        set.remove(PickerStyle::RgbSliders);
        assert!(!set.contains(PickerStyle::RgbSliders));
        assert_eq!(set.first(), Some(PickerStyle::HslWheel));
    }
}
