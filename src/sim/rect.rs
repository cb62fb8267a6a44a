//! Axis-aligned boxes
//!
//! Every visible entity's footprint is an `Aabb` in display units.
//! The origin is the top-left of the viewport; y grows downward.

use glam::Vec2;

/// Axis-aligned box. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn set_top(&mut self, top: f32) {
        self.pos.y = top;
    }

    /// Move horizontally by `dx` (negative = left).
    pub fn offset_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }

    /// Shrink by `amount` on all four sides.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(amount),
            size: self.size - Vec2::splat(2.0 * amount),
        }
    }

    /// Strict overlap test; boxes that merely touch do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let b = Aabb::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.bottom(), 60.0);
    }

    #[test]
    fn test_inset_shrinks_all_sides() {
        let b = Aabb::new(0.0, 0.0, 100.0, 100.0).inset(10.0);
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 90.0);
        assert_eq!(b.top(), 10.0);
        assert_eq!(b.bottom(), 90.0);
    }

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Aabb::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }
}
