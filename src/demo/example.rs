//! Example options showing what the pickers can do

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use macroquad::prelude::Vec2;

use super::config::DemoConfig;
use super::form::DemoForm;
use crate::host::{ColorOption, ConfigMenuHost, ImageOption, OptionsApi, TextLayoutFactory};
use crate::picker::{style, ImagePickerCallbacks, Rgba8};
use crate::ui::{theme, Rect, Surface};

pub const OWNER: &str = "picker-kit.example";

const SWATCH_SIZE: f32 = 48.0;

/// Colors offered by the image picker example
pub const PALETTE: [(&str, Rgba8); 8] = [
    ("Crimson", Rgba8::rgb(220, 20, 60)),
    ("Goldenrod", Rgba8::rgb(218, 165, 32)),
    ("Olive drab", Rgba8::rgb(107, 142, 35)),
    ("Teal", Rgba8::rgb(0, 128, 128)),
    ("Steel blue", Rgba8::rgb(70, 130, 180)),
    ("Rebecca purple", Rgba8::rgb(102, 51, 153)),
    ("Slate gray", Rgba8::rgb(112, 128, 144)),
    ("Translucent white", Rgba8::new(255, 255, 255, 96)),
];

type Getter = fn(&DemoConfig) -> Rgba8;
type Setter = fn(&mut DemoConfig, Rgba8);

/// Owns the example config and (un)registers its options with a form
pub struct Example {
    config: Rc<RefCell<DemoConfig>>,
    save_path: Option<PathBuf>,
    style_override: Option<u32>,
}

impl Example {
    pub fn new(config: DemoConfig, save_path: Option<PathBuf>) -> Self {
        Self {
            config: Rc::new(RefCell::new(config)),
            save_path,
            style_override: None,
        }
    }

    /// Replace the style flags of the last color option
    pub fn with_style_override(mut self, bits: Option<u32>) -> Self {
        self.style_override = bits;
        self
    }

    pub fn config(&self) -> DemoConfig {
        self.config.borrow().clone()
    }

    fn color(&self, name: &'static str, tooltip: &'static str, get: Getter, set: Setter) -> ColorOption {
        let (read, write) = (self.config.clone(), self.config.clone());
        ColorOption::new(
            OWNER,
            Box::new(move || name.to_string()),
            Box::new(move || get(&read.borrow())),
            Box::new(move |c| set(&mut write.borrow_mut(), c)),
        )
        .tooltip(Box::new(move || tooltip.to_string()))
    }

    fn swatch_option(&self) -> ImageOption {
        let (read, write) = (self.config.clone(), self.config.clone());
        let callbacks = ImagePickerCallbacks {
            get_value: Box::new(move || read.borrow().swatch),
            set_value: Box::new(move |v| write.borrow_mut().swatch = v),
            max_value: Box::new(|| PALETTE.len() as u32 - 1),
            max_image_height: Box::new(|| SWATCH_SIZE),
            max_image_width: Box::new(|| SWATCH_SIZE),
            draw_image: Box::new(draw_swatch),
            label: Some(Box::new(|i| PALETTE.get(i as usize).map(|(name, _)| name.to_string()))),
        };
        let config = self.config.borrow();
        ImageOption::new(OWNER, Box::new(|| "Swatch".to_string()), callbacks)
            .tooltip(Box::new(|| "An image picker cycling through a palette of swatches".to_string()))
            .field_id("swatch")
            .arrows(config.swatch_arrows)
            .label(config.swatch_label)
    }

    /// Register the owner callbacks and every example option
    pub fn add_to_form(&self, form: &mut DemoForm, text_layout: TextLayoutFactory<'_>) {
        let reset_config = self.config.clone();
        let save_config = self.config.clone();
        let save_path = self.save_path.clone();
        form.register(
            OWNER,
            Box::new(move || *reset_config.borrow_mut() = DemoConfig::default()),
            Box::new(move || {
                let Some(path) = &save_path else {
                    return;
                };
                if let Err(e) = save_config.borrow().save(path) {
                    log::warn!("could not save example config: {}", e);
                }
            }),
        );

        let mut api = OptionsApi::new(Some(form), text_layout);
        api.add_color_option(self.color(
            "Default options",
            "Color option with the default settings",
            |c| c.default_color,
            |c, v| c.default_color = v,
        ));
        api.add_color_option(
            self.color(
                "Simple RGBA sliders",
                "A single picker style (the RGB sliders), with alpha",
                |c| c.slider_color,
                |c, v| c.slider_color = v,
            )
            .style_bits(style::RGB_SLIDERS),
        );
        api.add_color_option(
            self.color(
                "Single picker, no alpha",
                "Every picker style, one at a time, with no alpha slider",
                |c| c.radio_color,
                |c, v| c.radio_color = v,
            )
            .show_alpha(false)
            .style_bits(style::ALL_STYLES | style::RADIO_CHOOSER),
        );
        api.add_color_option(
            self.color(
                "All pickers, no alpha",
                "Every picker style, several visible at a time, with no alpha slider",
                |c| c.toggle_color,
                |c, v| c.toggle_color = v,
            )
            .show_alpha(false)
            .style_bits(self.style_override.unwrap_or(style::ALL_STYLES | style::TOGGLE_CHOOSER)),
        );
        api.add_image_option(self.swatch_option());
    }

    pub fn remove_from_form(&self, form: &mut DemoForm) {
        form.unregister(OWNER);
    }
}

fn draw_swatch(index: u32, surface: &mut dyn Surface, pos: Vec2) {
    let rect = Rect::new(pos.x, pos.y, SWATCH_SIZE, SWATCH_SIZE);
    if let Some((_, color)) = PALETTE.get(index as usize) {
        surface.fill_rect(rect, color.to_color());
    }
    surface.stroke_rect(rect, 1.0, theme::BORDER_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::fixed_text_layout;
    use crate::ui::TextLayout;
    use tempfile::TempDir;

    fn layouts() -> TextLayoutFactory<'static> {
        Box::new(|| -> Box<dyn TextLayout> { Box::new(fixed_text_layout()) })
    }

    #[test]
    fn test_registers_all_options() {
        let example = Example::new(DemoConfig::default(), None);
        let mut form = DemoForm::new();
        example.add_to_form(&mut form, layouts());
        assert_eq!(
            form.option_names(),
            vec![
                "Default options",
                "Simple RGBA sliders",
                "Single picker, no alpha",
                "All pickers, no alpha",
                "Swatch",
            ]
        );
        example.remove_from_form(&mut form);
        assert!(form.is_empty());
    }

    #[test]
    fn test_save_persists_and_reset_restores_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("demo.ron");
        let start = DemoConfig {
            swatch: 4,
            toggle_color: Rgba8::new(9, 8, 7, 6),
            ..DemoConfig::default()
        };
        let example = Example::new(start.clone(), Some(path.clone()));
        let mut form = DemoForm::new();
        example.add_to_form(&mut form, layouts());

        form.open();
        form.save();
        assert_eq!(DemoConfig::load(&path).unwrap(), start);

        form.reset();
        assert_eq!(example.config(), DemoConfig::default());
        form.save();
        assert_eq!(DemoConfig::load(&path).unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_swatch_draws_palette_color() {
        let mut surface = crate::ui::testing::RecordingSurface::new();
        draw_swatch(3, &mut surface, Vec2::new(1.0, 2.0));
        assert_eq!(
            surface.fills_of(PALETTE[3].1.to_color()),
            vec![Rect::new(1.0, 2.0, SWATCH_SIZE, SWATCH_SIZE)]
        );
    }
}
