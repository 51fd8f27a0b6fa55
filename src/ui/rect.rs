//! Rectangle type for widget geometry

/// A rectangle defined by its top-left corner and size, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size anchored at the origin
    pub const fn sized(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Half-open hit test: `[x, x+w) x [y, y+h)`
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Same size, moved so the top-left corner sits at `(x, y)`
    pub fn at(&self, x: f32, y: f32) -> Self {
        Self::new(x, y, self.w, self.h)
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }
}
