//! Bridge between the pickers and a config-menu host
//!
//! A host that can display custom-drawn fields implements [`ConfigMenuHost`].
//! Callers build options through [`OptionsApi`], which holds the host as an
//! optional capability: when no host is present every call is a no-op.

use macroquad::prelude::Vec2;

use crate::picker::{
    ArrowLocation, ColorPickerOption, ColorPickerStyle, ImagePickerCallbacks, ImagePickerOption, LabelLocation, Rgba8,
};
use crate::ui::{Surface, TextLayout, UiContext};

/// Produces display text (field names, tooltips) on demand
pub type TextFn = Box<dyn Fn() -> String>;

/// A custom-drawn field in the host's form
pub trait ComplexOption {
    /// Render at `pos` and handle input for this frame
    fn draw(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, pos: Vec2);

    /// Space to reserve; must not depend on anything `draw` changes
    fn height(&self) -> f32;

    /// The form is about to be shown
    fn before_menu_opened(&mut self);

    /// The user confirmed the form
    fn before_save(&mut self);

    /// The user reset the form to its committed values
    fn after_reset(&mut self);
}

impl ComplexOption for ImagePickerOption {
    fn draw(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, pos: Vec2) {
        ImagePickerOption::draw(self, ctx, surface, pos);
    }

    fn height(&self) -> f32 {
        ImagePickerOption::height(self)
    }

    fn before_menu_opened(&mut self) {
        self.reset();
    }

    fn before_save(&mut self) {
        self.save_changes();
    }

    fn after_reset(&mut self) {
        self.reset();
    }
}

impl ComplexOption for ColorPickerOption {
    fn draw(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, pos: Vec2) {
        ColorPickerOption::draw(self, ctx, surface, pos);
    }

    fn height(&self) -> f32 {
        ColorPickerOption::height(self)
    }

    fn before_menu_opened(&mut self) {
        self.reset();
    }

    fn before_save(&mut self) {
        self.save_changes();
    }

    fn after_reset(&mut self) {
        self.reset();
    }
}

/// Everything a host needs to show one custom field
pub struct ComplexOptionRegistration {
    /// Identifies the registering party for later unregistration
    pub owner: String,
    pub name: TextFn,
    pub tooltip: Option<TextFn>,
    pub field_id: Option<String>,
    pub option: Box<dyn ComplexOption>,
}

impl std::fmt::Debug for ComplexOptionRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplexOptionRegistration")
            .field("owner", &self.owner)
            .field("name", &(self.name)())
            .field("field_id", &self.field_id)
            .finish_non_exhaustive()
    }
}

/// A config menu that accepts custom-drawn fields
pub trait ConfigMenuHost {
    fn add_complex_option(&mut self, registration: ComplexOptionRegistration);

    /// Drop every field registered by `owner`
    fn unregister(&mut self, owner: &str);
}

/// Parameters for [`OptionsApi::add_image_option`]
pub struct ImageOption {
    pub owner: String,
    pub name: TextFn,
    pub tooltip: Option<TextFn>,
    pub field_id: Option<String>,
    pub arrows: ArrowLocation,
    pub label: LabelLocation,
    pub callbacks: ImagePickerCallbacks,
}

impl ImageOption {
    pub fn new(owner: impl Into<String>, name: TextFn, callbacks: ImagePickerCallbacks) -> Self {
        Self {
            owner: owner.into(),
            name,
            tooltip: None,
            field_id: None,
            arrows: ArrowLocation::Top,
            label: LabelLocation::Top,
            callbacks,
        }
    }

    pub fn tooltip(mut self, tooltip: TextFn) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn field_id(mut self, id: impl Into<String>) -> Self {
        self.field_id = Some(id.into());
        self
    }

    pub fn arrows(mut self, arrows: ArrowLocation) -> Self {
        self.arrows = arrows;
        self
    }

    pub fn label(mut self, label: LabelLocation) -> Self {
        self.label = label;
        self
    }
}

/// Parameters for [`OptionsApi::add_color_option`]
pub struct ColorOption {
    pub owner: String,
    pub name: TextFn,
    pub tooltip: Option<TextFn>,
    pub field_id: Option<String>,
    pub get_value: Box<dyn Fn() -> Rgba8>,
    pub set_value: Box<dyn FnMut(Rgba8)>,
    pub show_alpha: bool,
    /// Packed style flags, see [`crate::picker::style`]
    pub style_bits: u32,
}

impl ColorOption {
    /// Alpha shown, RGB sliders only
    pub fn new(
        owner: impl Into<String>,
        name: TextFn,
        get_value: Box<dyn Fn() -> Rgba8>,
        set_value: Box<dyn FnMut(Rgba8)>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name,
            tooltip: None,
            field_id: None,
            get_value,
            set_value,
            show_alpha: true,
            style_bits: 0,
        }
    }

    pub fn tooltip(mut self, tooltip: TextFn) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn field_id(mut self, id: impl Into<String>) -> Self {
        self.field_id = Some(id.into());
        self
    }

    pub fn show_alpha(mut self, show: bool) -> Self {
        self.show_alpha = show;
        self
    }

    pub fn style_bits(mut self, bits: u32) -> Self {
        self.style_bits = bits;
        self
    }
}

/// Creates a text layout for each new image picker
pub type TextLayoutFactory<'a> = Box<dyn Fn() -> Box<dyn TextLayout> + 'a>;

/// Simplified option creation for third-party callers
pub struct OptionsApi<'a> {
    host: Option<&'a mut dyn ConfigMenuHost>,
    text_layout: TextLayoutFactory<'a>,
}

impl<'a> OptionsApi<'a> {
    pub fn new(host: Option<&'a mut dyn ConfigMenuHost>, text_layout: TextLayoutFactory<'a>) -> Self {
        if host.is_none() {
            log::debug!("no config menu host, options will not be registered");
        }
        Self { host, text_layout }
    }

    pub fn is_available(&self) -> bool {
        self.host.is_some()
    }

    pub fn add_image_option(&mut self, params: ImageOption) {
        let Some(host) = self.host.as_deref_mut() else {
            return;
        };
        let option = ImagePickerOption::new(params.callbacks, (self.text_layout)())
            .arrows(params.arrows)
            .label_location(params.label);
        log::debug!("registering image option for {}", params.owner);
        host.add_complex_option(ComplexOptionRegistration {
            owner: params.owner,
            name: params.name,
            tooltip: params.tooltip,
            field_id: params.field_id,
            option: Box::new(option),
        });
    }

    pub fn add_color_option(&mut self, params: ColorOption) {
        let Some(host) = self.host.as_deref_mut() else {
            return;
        };
        let option = ColorPickerOption::new(
            params.get_value,
            params.set_value,
            params.show_alpha,
            ColorPickerStyle::from_bits(params.style_bits),
        );
        log::debug!("registering color option for {}", params.owner);
        host.add_complex_option(ComplexOptionRegistration {
            owner: params.owner,
            name: params.name,
            tooltip: params.tooltip,
            field_id: params.field_id,
            option: Box::new(option),
        });
    }

    pub fn unregister(&mut self, owner: &str) {
        if let Some(host) = self.host.as_deref_mut() {
            host.unregister(owner);
        }
    }
}
