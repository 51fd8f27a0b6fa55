//! Image picker: a bounded index shown as an image with left/right arrows
//!
//! The picker edits a working copy of an externally owned value. Arrow
//! clicks change only the working copy; [`ImagePickerOption::save_changes`]
//! writes it back and [`ImagePickerOption::reset`] discards it.

use macroquad::prelude::Vec2;

use super::layout::{ArrowLocation, LabelLocation, LayoutInput, PickerGeometry};
use crate::ui::{IconButton, Surface, TextLayout, UiContext, LEFT_ARROW, RIGHT_ARROW};

/// Draws the image for an index with its top-left corner at the position
pub type DrawImageFn = Box<dyn Fn(u32, &mut dyn Surface, Vec2)>;

/// Label text for an index; `None` draws as an empty label
pub type LabelFn = Box<dyn Fn(u32) -> Option<String>>;

/// The host-supplied capabilities an image picker is built from
pub struct ImagePickerCallbacks {
    /// Read the committed value
    pub get_value: Box<dyn Fn() -> u32>,
    /// Write the committed value
    pub set_value: Box<dyn FnMut(u32)>,
    /// Largest selectable index; may change between frames
    pub max_value: Box<dyn Fn() -> u32>,
    /// Tallest image, used for layout regardless of the shown index
    pub max_image_height: Box<dyn Fn() -> f32>,
    /// Widest image, used for layout regardless of the shown index
    pub max_image_width: Box<dyn Fn() -> f32>,
    pub draw_image: DrawImageFn,
    /// Label for the current index, or `None` to show no label at all
    pub label: Option<LabelFn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrow {
    Left,
    Right,
}

pub struct ImagePickerOption {
    callbacks: ImagePickerCallbacks,
    arrow_location: ArrowLocation,
    label_location: LabelLocation,
    text: Box<dyn TextLayout>,
    left_button: IconButton<Arrow>,
    right_button: IconButton<Arrow>,
    arrow_button_height: f32,
    current_value: u32,
    geometry: PickerGeometry,
}

impl ImagePickerOption {
    /// Create a picker with arrows and label on top
    ///
    /// The working value starts at zero; hosts call [`Self::reset`] before
    /// the first frame to load the committed value.
    pub fn new(callbacks: ImagePickerCallbacks, text: Box<dyn TextLayout>) -> Self {
        let left_button = IconButton::new(LEFT_ARROW, "Previous", Arrow::Left, true);
        let right_button = IconButton::new(RIGHT_ARROW, "Next", Arrow::Right, true);
        let arrow_button_height = left_button.height().max(right_button.height());
        let label_location = if callbacks.label.is_some() {
            LabelLocation::Top
        } else {
            LabelLocation::None
        };
        Self {
            callbacks,
            arrow_location: ArrowLocation::Top,
            label_location,
            text,
            left_button,
            right_button,
            arrow_button_height,
            current_value: 0,
            geometry: PickerGeometry::default(),
        }
    }

    pub fn arrows(mut self, location: ArrowLocation) -> Self {
        self.arrow_location = location;
        self
    }

    /// Set the label placement; ignored when there is no label function
    pub fn label_location(mut self, location: LabelLocation) -> Self {
        if self.callbacks.label.is_some() {
            self.label_location = location;
        }
        self
    }

    pub fn effective_label_location(&self) -> LabelLocation {
        self.label_location
    }

    /// The working value
    pub fn current_value(&self) -> u32 {
        self.current_value
    }

    /// Geometry computed by the most recent draw
    pub fn geometry(&self) -> &PickerGeometry {
        &self.geometry
    }

    /// Load the committed value into the working value
    pub fn reset(&mut self) {
        self.current_value = (self.callbacks.get_value)();
        log::debug!("image picker reset to {}", self.current_value);
    }

    /// Write the working value back to the committed value
    pub fn save_changes(&mut self) {
        log::debug!("image picker saving {}", self.current_value);
        (self.callbacks.set_value)(self.current_value);
    }

    fn layout_input(&self, label_h: f32) -> LayoutInput {
        LayoutInput {
            arrows: self.arrow_location,
            label: self.label_location,
            left_arrow_w: self.left_button.width(),
            right_arrow_w: self.right_button.width(),
            arrow_h: self.arrow_button_height,
            content_w: (self.callbacks.max_image_width)(),
            content_h: (self.callbacks.max_image_height)(),
            label_h,
        }
    }

    /// Height the picker occupies, independent of the working value
    pub fn height(&self) -> f32 {
        let label_h = if self.label_location == LabelLocation::None {
            0.0
        } else {
            self.text.line_height()
        };
        self.layout_input(label_h).total_height()
    }

    fn click(&mut self, arrow: Arrow) {
        match arrow {
            Arrow::Left => self.current_value = self.current_value.saturating_sub(1),
            Arrow::Right => {
                if self.current_value < (self.callbacks.max_value)() {
                    self.current_value += 1;
                }
            }
        }
        log::trace!("image picker {:?} -> {}", arrow, self.current_value);
    }

    fn draw_arrows(&self, ctx: &mut UiContext, surface: &mut dyn Surface, max: u32) -> Option<Arrow> {
        let g = &self.geometry;
        let mut clicked = None;
        if self.current_value > 0 {
            clicked = clicked.or(self.left_button.draw(ctx, surface, g.left_arrow.x, g.left_arrow.y));
        }
        if self.current_value < max {
            clicked = clicked.or(self.right_button.draw(ctx, surface, g.right_arrow.x, g.right_arrow.y));
        }
        clicked
    }

    /// Draw the picker with its top-left corner at `pos`, handling arrow clicks
    pub fn draw(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, pos: Vec2) {
        // The set of choices may have shrunk since the last frame
        let max = (self.callbacks.max_value)();
        self.current_value = self.current_value.min(max);

        let (x, y) = (pos.x.round(), pos.y.round());
        let has_label = self.label_location != LabelLocation::None;

        // The label is a single unwrapped line so the row matches `height()`;
        // text wider than the control overflows sideways
        let mut label_w = 0.0;
        let label_h = if has_label {
            let text = self
                .callbacks
                .label
                .as_ref()
                .and_then(|f| f(self.current_value))
                .unwrap_or_default();
            self.text.layout(text.lines().next().unwrap_or_default(), f32::INFINITY);
            label_w = self.text.last_width();
            self.text.line_height()
        } else {
            0.0
        };
        self.geometry = PickerGeometry::compute(&self.layout_input(label_h), x, y);

        let mut clicked = None;

        // Top row
        if self.arrow_location == ArrowLocation::Top {
            clicked = clicked.or(self.draw_arrows(ctx, surface, max));
        }
        if self.label_location == LabelLocation::Top {
            self.draw_label(surface, x, label_w);
        }

        // Middle row
        let content = self.geometry.content;
        (self.callbacks.draw_image)(self.current_value, surface, Vec2::new(content.x, content.y));
        if self.arrow_location == ArrowLocation::Sides {
            clicked = clicked.or(self.draw_arrows(ctx, surface, max));
        }

        // Bottom row
        if self.arrow_location == ArrowLocation::Bottom {
            clicked = clicked.or(self.draw_arrows(ctx, surface, max));
        }
        if self.label_location == LabelLocation::Bottom {
            self.draw_label(surface, x, label_w);
        }

        if let Some(arrow) = clicked {
            self.click(arrow);
        }
    }

    fn draw_label(&self, surface: &mut dyn Surface, x: f32, label_w: f32) {
        if let Some(top) = self.geometry.label_y {
            let left = x + ((self.geometry.total_width - label_w) * 0.5).floor();
            self.text.draw_last_layout(surface, left, top);
        }
    }
}
