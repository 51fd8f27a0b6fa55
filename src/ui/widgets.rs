//! Basic UI widgets

use super::{theme, IconSource, Rect, Surface, Tooltip, UiContext};

/// A pressable icon with a bound click action
///
/// The button owns no state beyond its icon footprint and flags. Clicking is
/// edge-triggered: the action is produced only in the frame the left button
/// goes down inside the drawn rectangle, so holding the button never
/// repeat-fires.
pub struct IconButton<A> {
    icon: IconSource,
    label: String,
    on_click: A,
    enabled: bool,
    active: bool,
}

impl<A: Copy> IconButton<A> {
    pub fn new(icon: IconSource, label: impl Into<String>, on_click: A, enabled: bool) -> Self {
        Self {
            icon,
            label: label.into(),
            on_click,
            enabled,
            active: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.icon.w
    }

    pub fn height(&self) -> f32 {
        self.icon.h
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Highlight as the selected entry of a group
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Screen rectangle the button covers when drawn at `(x, y)`
    pub fn rect_at(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, self.icon.w, self.icon.h)
    }

    /// Draw at `(x, y)` and return the bound action if clicked this frame
    pub fn draw(&self, ctx: &mut UiContext, surface: &mut dyn Surface, x: f32, y: f32) -> Option<A> {
        let rect = self.rect_at(x, y);
        let hovered = self.enabled && ctx.mouse.inside(&rect);
        let pressed = self.enabled && ctx.mouse.clicking(&rect);
        let clicked = self.enabled && ctx.dragging.is_none() && ctx.mouse.clicked(&rect);

        if hovered && !self.label.is_empty() {
            ctx.set_tooltip(&self.label, ctx.mouse.x, ctx.mouse.y);
        }

        // Background only when active or interacted with (flat style)
        if self.active {
            surface.fill_rect(rect, theme::ACCENT_COLOR);
        } else if pressed {
            surface.fill_rect(rect, theme::BUTTON_PRESSED);
        } else if hovered {
            surface.fill_rect(rect, theme::BUTTON_HOVER);
        }

        let icon_color = if !self.enabled {
            theme::ICON_DISABLED
        } else if self.active || hovered {
            theme::ICON_HOVER
        } else {
            theme::ICON_COLOR
        };
        surface.icon(self.icon.glyph, rect, icon_color);

        clicked.then_some(self.on_click)
    }
}

/// Draw a tooltip box below-right of the pointer, kept inside `bounds`
///
/// `text_width` measures the text at [`theme::FONT_SIZE_SMALL`].
pub fn draw_tooltip(surface: &mut dyn Surface, tooltip: &Tooltip, bounds: Rect, text_width: impl Fn(&str) -> f32) {
    let w = text_width(&tooltip.text) + 8.0;
    let h = theme::FONT_SIZE_SMALL + 8.0;
    let x = (tooltip.x + 12.0).min(bounds.right() - w).max(bounds.x);
    let y = (tooltip.y + 16.0).min(bounds.bottom() - h).max(bounds.y);
    let rect = Rect::new(x.round(), y.round(), w, h);
    surface.fill_rect(rect, theme::TOOLTIP_BG);
    surface.stroke_rect(rect, 1.0, theme::BORDER_COLOR);
    surface.text(&tooltip.text, rect.x + 4.0, rect.y + 4.0, theme::FONT_SIZE_SMALL, theme::TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::RecordingSurface;
    use crate::ui::{MouseState, LEFT_ARROW};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Msg {
        Go,
    }

    fn frame(mouse: MouseState) -> UiContext {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse);
        ctx
    }

    #[test]
    fn test_size_from_icon() {
        let b = IconButton::new(LEFT_ARROW, "", Msg::Go, true);
        assert_eq!(b.width(), LEFT_ARROW.w);
        assert_eq!(b.height(), LEFT_ARROW.h);
    }

    #[test]
    fn test_click_inside_fires_once() {
        let b = IconButton::new(LEFT_ARROW, "", Msg::Go, true);
        let mut s = RecordingSurface::new();
        let mut ctx = frame(MouseState::press(10.0, 10.0));
        assert_eq!(b.draw(&mut ctx, &mut s, 0.0, 0.0), Some(Msg::Go));

        // Held on the next frame: no repeat
        ctx.begin_frame(MouseState::held(10.0, 10.0));
        assert_eq!(b.draw(&mut ctx, &mut s, 0.0, 0.0), None);
    }

    #[test]
    fn test_click_outside_is_noop() {
        let b = IconButton::new(LEFT_ARROW, "", Msg::Go, true);
        let mut s = RecordingSurface::new();
        // Right edge is exclusive
        let mut ctx = frame(MouseState::press(LEFT_ARROW.w, 5.0));
        assert_eq!(b.draw(&mut ctx, &mut s, 0.0, 0.0), None);
    }

    #[test]
    fn test_disabled_never_fires() {
        let b = IconButton::new(LEFT_ARROW, "", Msg::Go, false);
        let mut s = RecordingSurface::new();
        let mut ctx = frame(MouseState::press(5.0, 5.0));
        assert_eq!(b.draw(&mut ctx, &mut s, 0.0, 0.0), None);
    }

    #[test]
    fn test_draws_icon_at_position() {
        let b = IconButton::new(LEFT_ARROW, "Previous", Msg::Go, true);
        let mut s = RecordingSurface::new();
        let mut ctx = frame(MouseState::hover(40.0, 31.0));
        b.draw(&mut ctx, &mut s, 30.0, 20.0);
        assert_eq!(
            s.icons(),
            vec![(LEFT_ARROW.glyph, Rect::new(30.0, 20.0, LEFT_ARROW.w, LEFT_ARROW.h))]
        );
        assert_eq!(ctx.tooltip.map(|t| t.text), Some("Previous".to_string()));
    }

    #[test]
    fn test_active_draws_accent_background() {
        let b = IconButton::new(LEFT_ARROW, "", Msg::Go, true).with_active(true);
        let mut s = RecordingSurface::new();
        let mut ctx = frame(MouseState::hover(500.0, 500.0));
        b.draw(&mut ctx, &mut s, 0.0, 0.0);
        assert!(b.is_active());
        assert_eq!(s.fills_of(theme::ACCENT_COLOR), vec![b.rect_at(0.0, 0.0)]);
    }

    #[test]
    fn test_tooltip_stays_on_screen() {
        let tip = Tooltip {
            text: "abcd".to_string(),
            x: 95.0,
            y: 2.0,
        };
        let mut s = RecordingSurface::new();
        draw_tooltip(&mut s, &tip, Rect::new(0.0, 0.0, 100.0, 100.0), |t| t.len() as f32 * 8.0);
        let boxes = s.fills_of(theme::TOOLTIP_BG);
        assert_eq!(boxes, vec![Rect::new(100.0 - 40.0, 18.0, 40.0, theme::FONT_SIZE_SMALL + 8.0)]);
        assert_eq!(s.texts(), vec![("abcd".to_string(), 64.0, 22.0)]);
    }
}
