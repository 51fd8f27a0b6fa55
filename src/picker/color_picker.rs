//! Color picker option: swatch plus one or more editing styles
//!
//! Like the image picker it edits a working copy of a committed color.
//! Which styles are visible is decided by the [`Chooser`]; the reserved
//! height covers the tallest enabled style so hiding or showing a style
//! never moves the rest of the form.

use macroquad::prelude::Vec2;

use super::color::Rgba8;
use super::color_widgets::{draw_checkerboard, ChannelSliders, ColorWheel, WheelModel};
use super::layout::MARGIN;
use super::style::{Chooser, ColorPickerStyle, PickerStyle, StyleSet};
use crate::ui::{theme, IconButton, Rect, Surface, UiContext};

/// Side of the square preview swatch
pub const SWATCH_SIZE: f32 = 64.0;

const CHOOSER_SPACING: f32 = 2.0;

pub struct ColorPickerOption {
    get_value: Box<dyn Fn() -> Rgba8>,
    set_value: Box<dyn FnMut(Rgba8)>,
    show_alpha: bool,
    style: ColorPickerStyle,
    visible: StyleSet,
    chooser_buttons: Vec<IconButton<PickerStyle>>,
    sliders: ChannelSliders,
    hsv_wheel: ColorWheel,
    hsl_wheel: ColorWheel,
    current: Rgba8,
}

impl ColorPickerOption {
    pub fn new(
        get_value: Box<dyn Fn() -> Rgba8>,
        set_value: Box<dyn FnMut(Rgba8)>,
        show_alpha: bool,
        style: ColorPickerStyle,
    ) -> Self {
        let chooser_buttons = style
            .styles
            .iter()
            .map(|s| IconButton::new(s.icon(), s.label(), s, true))
            .collect();
        Self {
            get_value,
            set_value,
            show_alpha,
            style,
            visible: initial_visible(&style),
            chooser_buttons,
            sliders: ChannelSliders::new(show_alpha),
            hsv_wheel: ColorWheel::new(WheelModel::Hsv, show_alpha),
            hsl_wheel: ColorWheel::new(WheelModel::Hsl, show_alpha),
            current: Rgba8::default(),
        }
    }

    /// The working color
    pub fn current_color(&self) -> Rgba8 {
        self.current
    }

    /// Styles currently drawn
    pub fn visible_styles(&self) -> StyleSet {
        self.visible
    }

    /// Load the committed color and restore the initial chooser state
    pub fn reset(&mut self) {
        self.current = (self.get_value)();
        self.visible = initial_visible(&self.style);
        log::debug!("color picker reset to {:?}", self.current);
    }

    /// Write the working color back; alpha stays committed without an alpha control
    pub fn save_changes(&mut self) {
        let color = if self.show_alpha {
            self.current
        } else {
            self.current.with_alpha((self.get_value)().a)
        };
        log::debug!("color picker saving {:?}", color);
        (self.set_value)(color);
    }

    fn style_size(&self, style: PickerStyle) -> (f32, f32) {
        match style {
            PickerStyle::RgbSliders => self.sliders.size(),
            PickerStyle::HsvWheel => self.hsv_wheel.size(),
            PickerStyle::HslWheel => self.hsl_wheel.size(),
        }
    }

    fn chooser_height(&self) -> f32 {
        if !self.style.shows_chooser() {
            return 0.0;
        }
        let tallest = self.chooser_buttons.iter().map(|b| b.height()).fold(0.0, f32::max);
        tallest + MARGIN
    }

    /// Height the picker occupies, independent of color and chooser state
    pub fn height(&self) -> f32 {
        let tallest = self
            .style
            .styles
            .iter()
            .map(|s| self.style_size(s).1)
            .fold(SWATCH_SIZE, f32::max);
        self.chooser_height() + tallest
    }

    fn choose(&mut self, style: PickerStyle) {
        match self.style.chooser {
            Chooser::Radio => {
                self.visible = StyleSet::empty();
                self.visible.insert(style);
            }
            Chooser::Toggle => {
                if !self.visible.contains(style) {
                    self.visible.insert(style);
                } else if self.visible.len() > 1 {
                    self.visible.remove(style);
                }
            }
            Chooser::None => {}
        }
        log::trace!("color picker chooser {:?} -> {:?}", style, self.visible);
    }

    fn draw_chooser(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, x: f32, y: f32) -> Option<PickerStyle> {
        let mut clicked = None;
        let mut bx = x;
        for (button, style) in self.chooser_buttons.iter_mut().zip(self.style.styles.iter()) {
            button.set_active(self.visible.contains(style));
            clicked = clicked.or(button.draw(ctx, surface, bx, y));
            bx += button.width() + CHOOSER_SPACING;
        }
        clicked
    }

    /// Draw the picker with its top-left corner at `pos`
    pub fn draw(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, pos: Vec2) {
        let (x, y) = (pos.x.round(), pos.y.round());

        let mut row_y = y;
        if self.style.shows_chooser() {
            if let Some(style) = self.draw_chooser(ctx, surface, x, y) {
                self.choose(style);
            }
            row_y += self.chooser_height();
        }

        let swatch = Rect::new(x, row_y, SWATCH_SIZE, SWATCH_SIZE);
        draw_checkerboard(surface, swatch);
        surface.fill_rect(swatch, self.current.to_color());
        surface.stroke_rect(swatch, 1.0, theme::BORDER_COLOR);

        let mut px = swatch.right() + MARGIN;
        for style in self.visible.iter() {
            let color = &mut self.current;
            match style {
                PickerStyle::RgbSliders => self.sliders.draw(ctx, surface, px, row_y, color),
                PickerStyle::HsvWheel => self.hsv_wheel.draw(ctx, surface, px, row_y, color),
                PickerStyle::HslWheel => self.hsl_wheel.draw(ctx, surface, px, row_y, color),
            };
            px += self.style_size(style).0 + MARGIN;
        }
    }
}

/// Visible styles right after construction or reset
fn initial_visible(style: &ColorPickerStyle) -> StyleSet {
    match style.chooser {
        Chooser::Radio if style.shows_chooser() => style.styles.first().into_iter().collect(),
        _ => style.styles,
    }
}
