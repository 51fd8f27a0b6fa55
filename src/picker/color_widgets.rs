//! Sub-widgets that edit a color: channel sliders and color wheels
//!
//! Both are drag-driven. A press inside a track or wheel claims the drag in
//! the [`UiContext`]; while the button stays down the pointer position keeps
//! updating the color, even outside the widget, and every derived channel
//! is clamped to 0-255.

use macroquad::prelude::Color;

use super::color::{unit_to_channel, Channel, Hsl, Hsv, Rgba8};
use super::layout::MARGIN;
use crate::ui::{next_widget_id, theme, Rect, Surface, UiContext};

const LETTER_W: f32 = 14.0;
const TRACK_W: f32 = 150.0;
const TRACK_H: f32 = 14.0;
const ROW_GAP: f32 = 6.0;
const VALUE_W: f32 = 34.0;
const GRADIENT_STEPS: usize = 16;

const WHEEL_SIZE: f32 = 100.0;
const BAR_W: f32 = 14.0;
const WHEEL_CELL: f32 = 4.0;
const CHECKER_CELL: f32 = 6.0;

/// Checkerboard backdrop so translucent colors stay visible
pub fn draw_checkerboard(surface: &mut dyn Surface, rect: Rect) {
    let cols = (rect.w / CHECKER_CELL).ceil() as usize;
    let rows = (rect.h / CHECKER_CELL).ceil() as usize;
    for row in 0..rows {
        for col in 0..cols {
            let x = rect.x + col as f32 * CHECKER_CELL;
            let y = rect.y + row as f32 * CHECKER_CELL;
            let cell = Rect::new(
                x,
                y,
                CHECKER_CELL.min(rect.right() - x),
                CHECKER_CELL.min(rect.bottom() - y),
            );
            let color = if (row + col) % 2 == 0 { theme::CHECKER_LIGHT } else { theme::CHECKER_DARK };
            surface.fill_rect(cell, color);
        }
    }
}

/// Fraction of the way `pos` lies from `start` across `len`, clamped to 0-1
fn fraction(pos: f32, start: f32, len: f32) -> f32 {
    ((pos - start) / len).clamp(0.0, 1.0)
}

/// Press inside `rect` claims the drag; returns whether `id` is dragging
fn track_drag(ctx: &mut UiContext, id: u64, rect: Rect) -> bool {
    if ctx.mouse.clicked(&rect) {
        ctx.start_drag(id);
    }
    ctx.is_dragging(id)
}

/// One horizontal slider per channel
pub struct ChannelSliders {
    ids: [u64; 4],
    show_alpha: bool,
}

impl ChannelSliders {
    pub fn new(show_alpha: bool) -> Self {
        Self {
            ids: [next_widget_id(), next_widget_id(), next_widget_id(), next_widget_id()],
            show_alpha,
        }
    }

    fn channels(&self) -> &'static [Channel] {
        if self.show_alpha {
            &Channel::RGBA
        } else {
            &Channel::RGB
        }
    }

    pub fn size(&self) -> (f32, f32) {
        let rows = self.channels().len() as f32;
        (LETTER_W + TRACK_W + 4.0 + VALUE_W, rows * TRACK_H + (rows - 1.0) * ROW_GAP)
    }

    /// Track rectangle of the `row`th slider when drawn at `(x, y)`
    pub fn track_rect(&self, x: f32, y: f32, row: usize) -> Rect {
        Rect::new(x + LETTER_W, y + row as f32 * (TRACK_H + ROW_GAP), TRACK_W, TRACK_H)
    }

    /// Draw at `(x, y)`; returns true if `color` changed
    pub fn draw(&self, ctx: &mut UiContext, surface: &mut dyn Surface, x: f32, y: f32, color: &mut Rgba8) -> bool {
        let mut changed = false;
        for (row, &channel) in self.channels().iter().enumerate() {
            let track = self.track_rect(x, y, row);

            if track_drag(ctx, self.ids[row], track) {
                let value = unit_to_channel(fraction(ctx.mouse.x, track.x, track.w));
                if value != color.get(channel) {
                    color.set(channel, value);
                    changed = true;
                }
            }

            surface.text(channel.letter(), x, track.y, TRACK_H, theme::TEXT_COLOR);
            draw_channel_track(surface, track, *color, channel);
            let handle_x = track.x + (color.get(channel) as f32 / 255.0 * track.w).round();
            surface.fill_rect(Rect::new(handle_x - 1.0, track.y - 2.0, 3.0, track.h + 4.0), theme::HANDLE_COLOR);
            surface.text(
                &color.get(channel).to_string(),
                track.right() + 4.0,
                track.y,
                TRACK_H,
                theme::TEXT_COLOR,
            );
        }
        changed
    }
}

fn draw_channel_track(surface: &mut dyn Surface, track: Rect, color: Rgba8, channel: Channel) {
    if channel == Channel::Alpha {
        draw_checkerboard(surface, track);
    }
    let step_w = track.w / GRADIENT_STEPS as f32;
    for i in 0..GRADIENT_STEPS {
        let mut c = color;
        c.set(channel, unit_to_channel((i as f32 + 0.5) / GRADIENT_STEPS as f32));
        if channel != Channel::Alpha {
            c.a = 255;
        }
        surface.fill_rect(Rect::new(track.x + i as f32 * step_w, track.y, step_w, track.h), c.to_color());
    }
    surface.stroke_rect(track, 1.0, theme::BORDER_COLOR);
}

/// Color model a wheel edits in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelModel {
    /// Wheel picks hue/saturation, bar picks value
    Hsv,
    /// Wheel picks hue/saturation, bar picks lightness
    Hsl,
}

impl WheelModel {
    fn to_rgba(self, h: f32, s: f32, level: f32, a: u8) -> Rgba8 {
        match self {
            WheelModel::Hsv => Hsv { h, s, v: level }.to_rgba(a),
            WheelModel::Hsl => Hsl { h, s, l: level }.to_rgba(a),
        }
    }

    /// (hue, saturation, level) of a color
    fn components(self, c: Rgba8) -> (f32, f32, f32) {
        match self {
            WheelModel::Hsv => {
                let hsv = Hsv::from_rgba(c);
                (hsv.h, hsv.s, hsv.v)
            }
            WheelModel::Hsl => {
                let hsl = Hsl::from_rgba(c);
                (hsl.h, hsl.s, hsl.l)
            }
        }
    }

    /// Level at which the wheel itself is painted
    fn display_level(self) -> f32 {
        match self {
            WheelModel::Hsv => 1.0,
            WheelModel::Hsl => 0.5,
        }
    }
}

/// Hue/saturation wheel with a level bar and an optional alpha bar
pub struct ColorWheel {
    model: WheelModel,
    wheel_id: u64,
    bar_id: u64,
    alpha_id: u64,
    show_alpha: bool,
    hue: f32,
    saturation: f32,
    level: f32,
    /// Color the components were last derived from or produced
    synced: Option<Rgba8>,
}

impl ColorWheel {
    pub fn new(model: WheelModel, show_alpha: bool) -> Self {
        Self {
            model,
            wheel_id: next_widget_id(),
            bar_id: next_widget_id(),
            alpha_id: next_widget_id(),
            show_alpha,
            hue: 0.0,
            saturation: 0.0,
            level: 0.0,
            synced: None,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        let alpha = if self.show_alpha { MARGIN + BAR_W } else { 0.0 };
        (WHEEL_SIZE + MARGIN + BAR_W + alpha, WHEEL_SIZE)
    }

    pub fn wheel_rect(&self, x: f32, y: f32) -> Rect {
        Rect::new(x, y, WHEEL_SIZE, WHEEL_SIZE)
    }

    pub fn level_bar_rect(&self, x: f32, y: f32) -> Rect {
        Rect::new(x + WHEEL_SIZE + MARGIN, y, BAR_W, WHEEL_SIZE)
    }

    pub fn alpha_bar_rect(&self, x: f32, y: f32) -> Option<Rect> {
        self.show_alpha
            .then(|| Rect::new(x + WHEEL_SIZE + MARGIN + BAR_W + MARGIN, y, BAR_W, WHEEL_SIZE))
    }

    /// Re-derive components if the color was changed by someone else
    ///
    /// Alpha is ignored so that dragging the alpha bar does not disturb a
    /// hue that is undefined for grays.
    fn sync(&mut self, color: Rgba8) {
        let opaque = color.with_alpha(255);
        if self.synced == Some(opaque) {
            return;
        }
        let (h, s, level) = self.model.components(opaque);
        if s > 0.0 {
            self.hue = h;
        }
        self.saturation = s;
        self.level = level;
        self.synced = Some(opaque);
    }

    fn apply(&mut self, color: &mut Rgba8) {
        let next = self.model.to_rgba(self.hue, self.saturation, self.level, color.a);
        *color = next;
        self.synced = Some(next.with_alpha(255));
    }

    /// Draw at `(x, y)`; returns true if `color` changed
    pub fn draw(&mut self, ctx: &mut UiContext, surface: &mut dyn Surface, x: f32, y: f32, color: &mut Rgba8) -> bool {
        self.sync(*color);
        let before = *color;

        let wheel = self.wheel_rect(x, y);
        let radius = WHEEL_SIZE * 0.5;
        let (cx, cy) = (wheel.center_x(), wheel.center_y());
        let (dx, dy) = (ctx.mouse.x - cx, ctx.mouse.y - cy);
        let dist = (dx * dx + dy * dy).sqrt();

        if ctx.mouse.left_pressed && dist <= radius {
            ctx.start_drag(self.wheel_id);
        }
        if ctx.is_dragging(self.wheel_id) {
            if dist > 0.0 {
                self.hue = dy.atan2(dx).to_degrees().rem_euclid(360.0);
            }
            self.saturation = (dist / radius).min(1.0);
            self.apply(color);
        }

        let bar = self.level_bar_rect(x, y);
        if track_drag(ctx, self.bar_id, bar) {
            self.level = 1.0 - fraction(ctx.mouse.y, bar.y, bar.h);
            self.apply(color);
        }

        if let Some(alpha_bar) = self.alpha_bar_rect(x, y) {
            if track_drag(ctx, self.alpha_id, alpha_bar) {
                color.a = unit_to_channel(1.0 - fraction(ctx.mouse.y, alpha_bar.y, alpha_bar.h));
            }
            self.draw_alpha_bar(surface, alpha_bar, *color);
        }

        self.draw_wheel(surface, wheel, radius);
        self.draw_level_bar(surface, bar);

        *color != before
    }

    fn draw_wheel(&self, surface: &mut dyn Surface, wheel: Rect, radius: f32) {
        let (cx, cy) = (wheel.center_x(), wheel.center_y());
        let cells = (WHEEL_SIZE / WHEEL_CELL) as usize;
        let level = self.model.display_level();
        for row in 0..cells {
            for col in 0..cells {
                let px = wheel.x + (col as f32 + 0.5) * WHEEL_CELL;
                let py = wheel.y + (row as f32 + 0.5) * WHEEL_CELL;
                let (dx, dy) = (px - cx, py - cy);
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    continue;
                }
                let hue = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                let c = self.model.to_rgba(hue, dist / radius, level, 255);
                let cell = Rect::new(px - WHEEL_CELL * 0.5, py - WHEEL_CELL * 0.5, WHEEL_CELL, WHEEL_CELL);
                surface.fill_rect(cell, c.to_color());
            }
        }

        let angle = self.hue.to_radians();
        let mx = cx + angle.cos() * self.saturation * radius;
        let my = cy + angle.sin() * self.saturation * radius;
        surface.stroke_rect(Rect::new(mx - 3.0, my - 3.0, 6.0, 6.0), 1.0, theme::HANDLE_COLOR);
    }

    fn draw_level_bar(&self, surface: &mut dyn Surface, bar: Rect) {
        let step_h = bar.h / GRADIENT_STEPS as f32;
        for i in 0..GRADIENT_STEPS {
            let level = 1.0 - (i as f32 + 0.5) / GRADIENT_STEPS as f32;
            let c = self.model.to_rgba(self.hue, self.saturation, level, 255);
            surface.fill_rect(Rect::new(bar.x, bar.y + i as f32 * step_h, bar.w, step_h), c.to_color());
        }
        surface.stroke_rect(bar, 1.0, theme::BORDER_COLOR);
        draw_bar_indicator(surface, bar, 1.0 - self.level);
    }

    fn draw_alpha_bar(&self, surface: &mut dyn Surface, bar: Rect, color: Rgba8) {
        draw_checkerboard(surface, bar);
        let step_h = bar.h / GRADIENT_STEPS as f32;
        for i in 0..GRADIENT_STEPS {
            let a = unit_to_channel(1.0 - (i as f32 + 0.5) / GRADIENT_STEPS as f32);
            let fill: Color = color.with_alpha(a).to_color();
            surface.fill_rect(Rect::new(bar.x, bar.y + i as f32 * step_h, bar.w, step_h), fill);
        }
        surface.stroke_rect(bar, 1.0, theme::BORDER_COLOR);
        draw_bar_indicator(surface, bar, 1.0 - color.a as f32 / 255.0);
    }
}

/// Horizontal marker across a vertical bar at `frac` of its height
fn draw_bar_indicator(surface: &mut dyn Surface, bar: Rect, frac: f32) {
    let y = (bar.y + frac * bar.h).round();
    surface.line(bar.x - 2.0, y, bar.right() + 2.0, y, 2.0, theme::HANDLE_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::RecordingSurface;
    use crate::ui::MouseState;

    fn frame(ctx: &mut UiContext, mouse: MouseState) -> RecordingSurface {
        ctx.begin_frame(mouse);
        RecordingSurface::new()
    }

    #[test]
    fn test_slider_size_depends_on_alpha() {
        assert_eq!(ChannelSliders::new(true).size().1, 4.0 * TRACK_H + 3.0 * ROW_GAP);
        assert_eq!(ChannelSliders::new(false).size().1, 3.0 * TRACK_H + 2.0 * ROW_GAP);
    }

    #[test]
    fn test_slider_press_and_drag() {
        let sliders = ChannelSliders::new(true);
        let mut ctx = UiContext::new();
        let mut color = Rgba8::rgb(10, 20, 30);
        let green = sliders.track_rect(0.0, 0.0, 1);

        let mut s = frame(&mut ctx, MouseState::press(green.x + green.w * 0.5, green.center_y()));
        assert!(sliders.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color));
        assert_eq!(color, Rgba8::rgb(10, 128, 30));

        // Dragging past the end clamps, and stays on the claimed channel
        let mut s = frame(&mut ctx, MouseState::held(green.right() + 80.0, green.y - 40.0));
        assert!(sliders.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color));
        assert_eq!(color, Rgba8::rgb(10, 255, 30));

        let mut s = frame(&mut ctx, MouseState::held(green.x - 80.0, green.y));
        sliders.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color);
        assert_eq!(color.g, 0);

        // Released: moving does nothing
        let mut s = frame(&mut ctx, MouseState::hover(green.right(), green.y));
        assert!(!sliders.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color));
        assert_eq!(color.g, 0);
    }

    #[test]
    fn test_slider_press_outside_is_noop() {
        let sliders = ChannelSliders::new(false);
        let mut ctx = UiContext::new();
        let mut color = Rgba8::rgb(1, 2, 3);
        let mut s = frame(&mut ctx, MouseState::press(500.0, 500.0));
        assert!(!sliders.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color));
        assert_eq!(color, Rgba8::rgb(1, 2, 3));
    }

    #[test]
    fn test_alpha_slider_only_when_enabled() {
        let sliders = ChannelSliders::new(false);
        let mut ctx = UiContext::new();
        let mut color = Rgba8::new(0, 0, 0, 40);
        let fourth = sliders.track_rect(0.0, 0.0, 3);
        let mut s = frame(&mut ctx, MouseState::press(fourth.right() - 1.0, fourth.center_y()));
        sliders.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color);
        assert_eq!(color.a, 40);
    }

    #[test]
    fn test_wheel_edge_is_saturated_hue() {
        let mut wheel = ColorWheel::new(WheelModel::Hsv, false);
        let mut ctx = UiContext::new();
        let mut color = Rgba8::rgb(255, 255, 255);
        let r = wheel.wheel_rect(10.0, 10.0);
        let mut s = frame(&mut ctx, MouseState::press(r.right() - 1.0, r.center_y()));
        assert!(wheel.draw(&mut ctx, &mut s, 10.0, 10.0, &mut color));
        assert_eq!(color.r, 255);
        assert_eq!(color.g, color.b);
        assert!(color.g < 10);
    }

    #[test]
    fn test_wheel_center_is_gray() {
        let mut wheel = ColorWheel::new(WheelModel::Hsl, true);
        let mut ctx = UiContext::new();
        let mut color = Rgba8::new(200, 40, 40, 77);
        let r = wheel.wheel_rect(0.0, 0.0);
        let mut s = frame(&mut ctx, MouseState::press(r.center_x(), r.center_y()));
        wheel.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color);
        assert_eq!(color.r, color.g);
        assert_eq!(color.g, color.b);
        assert_eq!(color.a, 77);
    }

    #[test]
    fn test_level_bar_bottom_is_black() {
        let mut wheel = ColorWheel::new(WheelModel::Hsv, false);
        let mut ctx = UiContext::new();
        let mut color = Rgba8::rgb(30, 200, 90);
        let bar = wheel.level_bar_rect(0.0, 0.0);
        let mut s = frame(&mut ctx, MouseState::press(bar.center_x(), bar.bottom() - 0.01));
        wheel.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color);
        assert_eq!(color, Rgba8::rgb(0, 0, 0));

        // Dragging back up restores the hue that black could not hold
        let mut s = frame(&mut ctx, MouseState::held(bar.center_x(), bar.y - 5.0));
        wheel.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color);
        assert_eq!(color.g, 255);
        assert!(color.r < color.b && color.b < color.g);
    }

    #[test]
    fn test_alpha_bar() {
        let mut wheel = ColorWheel::new(WheelModel::Hsl, true);
        let mut ctx = UiContext::new();
        let mut color = Rgba8::rgb(10, 20, 30);
        let bar = wheel.alpha_bar_rect(0.0, 0.0).unwrap();
        let mut s = frame(&mut ctx, MouseState::press(bar.center_x(), bar.center_y()));
        wheel.draw(&mut ctx, &mut s, 0.0, 0.0, &mut color);
        assert_eq!(color, Rgba8::new(10, 20, 30, 128));
        assert!(ColorWheel::new(WheelModel::Hsl, false).alpha_bar_rect(0.0, 0.0).is_none());
    }

    #[test]
    fn test_checkerboard_covers_rect() {
        let mut s = RecordingSurface::new();
        draw_checkerboard(&mut s, Rect::new(0.0, 0.0, 14.0, 6.0));
        let area: f32 = s
            .cmds
            .iter()
            .map(|c| match c {
                crate::ui::testing::DrawCmd::Fill(r, _) => r.w * r.h,
                _ => 0.0,
            })
            .sum();
        assert_eq!(area, 14.0 * 6.0);
    }
}
