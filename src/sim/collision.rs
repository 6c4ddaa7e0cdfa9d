//! Axis-aligned collision tests
//!
//! All comparisons are edge-inclusive: touching counts as overlapping.

use glam::Vec2;

/// Axis-aligned rectangle, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
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

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point-in-rectangle, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Vertical extents touch or overlap
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() >= other.y && self.y <= other.bottom()
    }

    /// Full AABB overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.x && self.x <= other.right() && self.overlaps_vertically(other)
    }
}

/// Ball touches the top or bottom of the screen
pub fn hits_horizontal_wall(ball: &Rect, screen_height: f32) -> bool {
    ball.y <= 0.0 || ball.bottom() >= screen_height
}

/// Left paddle hit: the ball's left edge is within the paddle's span
pub fn hits_left_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.x >= paddle.x && ball.x <= paddle.right() && ball.overlaps_vertically(paddle)
}

/// Right paddle hit: any horizontal overlap with the paddle
pub fn hits_right_paddle(ball: &Rect, paddle: &Rect) -> bool {
    ball.overlaps(paddle)
}
