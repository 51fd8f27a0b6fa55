//! Placement of arrows and label around a picker's content region
//!
//! The picker is laid out in three rows:
//!
//! ```text
//! +----------------------------------+
//! | [<]        label           [>]   |  top row (arrows/label at Top)
//! |                                  |  margin, only if the row is used
//! | [<]  +------------------+  [>]   |  middle row (content, Sides arrows)
//! |      |     content      |        |
//! |      +------------------+        |
//! |                                  |  margin
//! | [<]        label           [>]   |  bottom row (arrows/label at Bottom)
//! +----------------------------------+
//! ```
//!
//! Everything here is a pure function of configuration and content size,
//! so the host can ask for the height before the frame is drawn.

use serde::{Deserialize, Serialize};

use crate::ui::Rect;

/// Gap between rows and between arrows and content
pub const MARGIN: f32 = 5.0;

/// Where the navigation arrows sit relative to the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArrowLocation {
    #[default]
    Top,
    Sides,
    Bottom,
}

/// Where the value label sits relative to the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelLocation {
    #[default]
    Top,
    None,
    Bottom,
}

/// Inputs that fully determine a picker's geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput {
    pub arrows: ArrowLocation,
    pub label: LabelLocation,
    pub left_arrow_w: f32,
    pub right_arrow_w: f32,
    /// Height of the taller of the two arrow buttons
    pub arrow_h: f32,
    pub content_w: f32,
    pub content_h: f32,
    /// Height of the label row, zero when there is no label
    pub label_h: f32,
}

impl LayoutInput {
    fn top_row(&self) -> f32 {
        let arrows = if self.arrows == ArrowLocation::Top { self.arrow_h } else { 0.0 };
        let label = if self.label == LabelLocation::Top { self.label_h } else { 0.0 };
        arrows.max(label)
    }

    fn bottom_row(&self) -> f32 {
        let arrows = if self.arrows == ArrowLocation::Bottom { self.arrow_h } else { 0.0 };
        let label = if self.label == LabelLocation::Bottom { self.label_h } else { 0.0 };
        arrows.max(label)
    }

    /// Horizontal offsets relative to the left edge: (content, right arrow)
    fn columns(&self) -> (f32, f32) {
        if self.arrows == ArrowLocation::Sides {
            let content = self.left_arrow_w + MARGIN;
            (content, content + self.content_w + MARGIN)
        } else {
            let right = (self.content_w - self.right_arrow_w).max(self.left_arrow_w + MARGIN);
            (0.0, right)
        }
    }

    /// Total width of the control
    pub fn total_width(&self) -> f32 {
        let (_, right) = self.columns();
        right + self.right_arrow_w
    }

    /// Total height of the control
    pub fn total_height(&self) -> f32 {
        let row = |h: f32| if h == 0.0 { 0.0 } else { h + MARGIN };
        self.content_h + row(self.top_row()) + row(self.bottom_row())
    }
}

/// Absolute geometry of one drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickerGeometry {
    pub top_row_height: f32,
    pub bottom_row_height: f32,
    pub total_width: f32,
    pub total_height: f32,
    /// Top of the row the arrows are drawn in
    pub arrow_row_y: f32,
    pub content: Rect,
    pub left_arrow: Rect,
    pub right_arrow: Rect,
    /// Top of the label, if a label row exists
    pub label_y: Option<f32>,
}

impl PickerGeometry {
    /// Compute the geometry for a control whose top-left corner is `(x, y)`
    pub fn compute(input: &LayoutInput, x: f32, y: f32) -> Self {
        let (content_dx, right_dx) = input.columns();
        let top_row = input.top_row();
        let bottom_row = input.bottom_row();

        let content_y = if top_row == 0.0 { y } else { y + top_row + MARGIN };
        let bottom_y = content_y + input.content_h + MARGIN;

        let arrow_row_y = match input.arrows {
            ArrowLocation::Top => y,
            ArrowLocation::Sides => content_y + ((input.content_h - input.arrow_h) * 0.5).floor(),
            ArrowLocation::Bottom => bottom_y,
        };

        let label_y = match input.label {
            LabelLocation::Top => Some(y),
            LabelLocation::Bottom => Some(bottom_y),
            LabelLocation::None => None,
        };

        Self {
            top_row_height: top_row,
            bottom_row_height: bottom_row,
            total_width: input.total_width(),
            total_height: input.total_height(),
            arrow_row_y,
            content: Rect::new(x + content_dx, content_y, input.content_w, input.content_h),
            left_arrow: Rect::new(x, arrow_row_y, input.left_arrow_w, input.arrow_h),
            right_arrow: Rect::new(x + right_dx, arrow_row_y, input.right_arrow_w, input.arrow_h),
            label_y,
        }
    }
}
