//! Minimal config menu that hosts complex options
//!
//! Rows are stacked top to bottom: the field name on the left, the option
//! to its right. Each row is as tall as the option says it is.

use macroquad::prelude::Vec2;

use crate::host::{ComplexOptionRegistration, ConfigMenuHost};
use crate::ui::{theme, Rect, Surface, UiContext};

const NAME_COLUMN_W: f32 = 220.0;
const ROW_GAP: f32 = 12.0;
const NAME_H: f32 = 18.0;

/// Callbacks an owner registers for its whole config
struct ModEntry {
    owner: String,
    reset: Box<dyn FnMut()>,
    save: Box<dyn FnMut()>,
}

#[derive(Default)]
pub struct DemoForm {
    mods: Vec<ModEntry>,
    options: Vec<ComplexOptionRegistration>,
    open: bool,
}

impl DemoForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an owner's reset and save callbacks
    pub fn register(&mut self, owner: impl Into<String>, reset: Box<dyn FnMut()>, save: Box<dyn FnMut()>) {
        let owner = owner.into();
        log::debug!("form: registered {}", owner);
        self.mods.retain(|m| m.owner != owner);
        self.mods.push(ModEntry { owner, reset, save });
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn option_names(&self) -> Vec<String> {
        self.options.iter().map(|o| (o.name)()).collect()
    }

    /// Show the form, loading every option's committed value
    pub fn open(&mut self) {
        self.open = true;
        for reg in &mut self.options {
            reg.option.before_menu_opened();
        }
    }

    /// Commit every option, then let owners persist
    pub fn save(&mut self) {
        for reg in &mut self.options {
            reg.option.before_save();
        }
        for entry in &mut self.mods {
            (entry.save)();
        }
    }

    /// Let owners restore defaults, then reload every option
    pub fn reset(&mut self) {
        for entry in &mut self.mods {
            (entry.reset)();
        }
        for reg in &mut self.options {
            reg.option.after_reset();
        }
    }

    fn row_height(reg: &ComplexOptionRegistration) -> f32 {
        reg.option.height().max(NAME_H)
    }

    pub fn draw(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, pos: Vec2) {
        let mut y = pos.y;
        for reg in &mut self.options {
            let row_h = Self::row_height(reg);
            let name_rect = Rect::new(pos.x, y, NAME_COLUMN_W, NAME_H);
            surface.text(&(reg.name)(), name_rect.x, name_rect.y, theme::FONT_SIZE_HEADER, theme::TEXT_COLOR);
            if let Some(tooltip) = &reg.tooltip {
                if ctx.mouse.inside(&name_rect) {
                    ctx.set_tooltip(&tooltip(), ctx.mouse.x, ctx.mouse.y);
                }
            }
            reg.option.draw(ctx, surface, Vec2::new(pos.x + NAME_COLUMN_W, y));
            y += row_h + ROW_GAP;
        }
    }
}

impl ConfigMenuHost for DemoForm {
    fn add_complex_option(&mut self, mut registration: ComplexOptionRegistration) {
        if self.open {
            registration.option.before_menu_opened();
        }
        self.options.push(registration);
    }

    fn unregister(&mut self, owner: &str) {
        log::debug!("form: unregistered {}", owner);
        self.mods.retain(|m| m.owner != owner);
        self.options.retain(|o| o.owner != owner);
    }
}
