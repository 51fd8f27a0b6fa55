//! Per-frame pointer state for widget hit-testing

use std::sync::atomic::{AtomicU64, Ordering};

use super::Rect;

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate an ID for a stateful widget (sliders, wheels)
///
/// IDs are handed out once at construction and never reused, so a drag
/// survives frames in which other widgets appear or disappear.
pub fn next_widget_id() -> u64 {
    NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)
}

/// Mouse button state, sampled once per frame by the host
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Pointer resting at `(x, y)` with no buttons held
    pub fn hover(x: f32, y: f32) -> Self {
        Self { x, y, ..Default::default() }
    }

    /// Frame in which the left button went down at `(x, y)`
    pub fn press(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            left_down: true,
            left_pressed: true,
        }
    }

    /// Left button still held at `(x, y)` (not a new press)
    pub fn held(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            left_down: true,
            left_pressed: false,
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is held down inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just went down inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// Hover text requested by a widget this frame
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// UI context passed through the frame
pub struct UiContext {
    pub mouse: MouseState,
    /// ID of the widget currently being dragged (if any)
    pub dragging: Option<u64>,
    /// Tooltip to draw after all widgets
    pub tooltip: Option<Tooltip>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            dragging: None,
            tooltip: None,
        }
    }

    /// Reset at start of frame (call before drawing any widget)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.tooltip = None;

        // Clear dragging if mouse released
        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    /// Start dragging a widget, unless another one already holds the drag
    pub fn start_drag(&mut self, id: u64) -> bool {
        match self.dragging {
            None => {
                self.dragging = Some(id);
                true
            }
            Some(current) => current == id,
        }
    }

    pub fn set_tooltip(&mut self, text: &str, x: f32, y: f32) {
        self.tooltip = Some(Tooltip {
            text: text.to_string(),
            x,
            y,
        });
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicked_requires_press_edge() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(MouseState::press(5.0, 5.0).clicked(&r));
        assert!(!MouseState::held(5.0, 5.0).clicked(&r));
        assert!(MouseState::held(5.0, 5.0).clicking(&r));
        assert!(!MouseState::press(15.0, 5.0).clicked(&r));
    }

    #[test]
    fn test_drag_released_on_button_up() {
        let mut ctx = UiContext::new();
        let id = next_widget_id();
        ctx.begin_frame(MouseState::press(1.0, 1.0));
        assert!(ctx.start_drag(id));
        ctx.begin_frame(MouseState::held(2.0, 1.0));
        assert!(ctx.is_dragging(id));
        ctx.begin_frame(MouseState::hover(2.0, 1.0));
        assert!(!ctx.is_dragging(id));
    }

    #[test]
    fn test_drag_not_stolen() {
        let mut ctx = UiContext::new();
        let a = next_widget_id();
        let b = next_widget_id();
        assert_ne!(a, b);
        ctx.begin_frame(MouseState::press(1.0, 1.0));
        assert!(ctx.start_drag(a));
        assert!(!ctx.start_drag(b));
        assert!(ctx.start_drag(a));
    }

    #[test]
    fn test_tooltip_cleared_each_frame() {
        let mut ctx = UiContext::new();
        ctx.set_tooltip("hello", 3.0, 4.0);
        assert!(ctx.tooltip.is_some());
        ctx.begin_frame(MouseState::default());
        assert!(ctx.tooltip.is_none());
    }
}
