//! Plain geometry types in document/viewport coordinates.

/// A point in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x_pos: f32, y_pos: f32) -> Self {
        Self { x: x_pos, y: y_pos }
    }
}

/// An axis-aligned rectangle in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub const fn new(x_pos: f32, y_pos: f32, width: f32, height: f32) -> Self {
        Self {
            x: x_pos,
            y: y_pos,
            width,
            height,
        }
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}
