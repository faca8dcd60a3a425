//! Rect - Integer rectangle regions
//!
//! Rectangles locate source regions, destination regions and clips in
//! absolute pixel space. Coordinates may be negative.

use crate::error::{Error, Result};

/// An axis-aligned integer rectangle
///
/// This is a simple `Copy` type since it's small and frequently copied.
/// A rectangle with zero width or height is empty, which is a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rect {
    /// The empty rectangle at the origin
    pub const EMPTY: Rect = Rect::new_unchecked(0, 0, 0, 0);

    /// Create a new rect
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative, or if the right or
    /// bottom edge doesn't fit in an `i32`.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rect dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        let rect = Self { x, y, w, h };
        if !rect.edges_fit() {
            return Err(Error::InvalidParameter(format!(
                "rect edges overflow: {:?}",
                rect
            )));
        }
        Ok(rect)
    }

    /// Create a rect without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rect of the given size at the origin
    pub const fn from_size(w: i32, h: i32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// Get the largest x coordinate inside the rect (inclusive)
    ///
    /// For an empty-width rect this is `x - 1`.
    #[inline]
    pub fn x_max(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Get the largest y coordinate inside the rect (inclusive)
    #[inline]
    pub fn y_max(&self) -> i32 {
        self.y + self.h - 1
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rect is valid (non-negative dimensions, edges in range)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w >= 0 && self.h >= 0 && self.edges_fit()
    }

    /// Check that `x + w` and `y + h` don't overflow
    #[inline]
    pub fn edges_fit(&self) -> bool {
        self.x.checked_add(self.w).is_some() && self.y.checked_add(self.h).is_some()
    }

    /// Check if the rect is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the rect
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rect contains another rect
    ///
    /// An empty rect is contained if its origin lies within the closed
    /// bounds of this rect.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rect overlaps with another
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Compute the intersection of two rects
    ///
    /// Returns `None` when the rects don't overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Compute the intersection of two rects, as an empty rect if disjoint
    pub fn intersected(&self, other: &Rect) -> Rect {
        self.intersect(other).unwrap_or(Rect {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            w: 0,
            h: 0,
        })
    }

    /// Translate the rect by (dx, dy)
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            w: self.w,
            h: self.h,
        }
    }

    /// Same size, new origin
    pub fn with_pos(&self, x: i32, y: i32) -> Rect {
        Rect { x, y, ..*self }
    }

    /// Same origin, new size
    pub fn with_size(&self, w: i32, h: i32) -> Rect {
        Rect { w, h, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn small_rect(x: i8, y: i8, w: u8, h: u8) -> Rect {
        Rect::new_unchecked(x as i32, y as i32, (w % 32) as i32, (h % 32) as i32)
    }

    #[test]
    fn test_new_rejects_negative_size() {
        assert!(Rect::new(0, 0, -1, 3).is_err());
        assert!(Rect::new(0, 0, 3, -1).is_err());
        assert!(Rect::new(-5, -7, 0, 0).is_ok());
    }

    #[test]
    fn test_bounds() {
        let r = Rect::new_unchecked(-2, 3, 4, 5);
        assert_eq!(r.x_max(), 1);
        assert_eq!(r.y_max(), 7);
        assert_eq!(r.right(), 2);
        assert_eq!(r.bottom(), 8);
        assert_eq!(r.area(), 20);
        assert!(!r.is_empty());
        assert!(Rect::new_unchecked(3, 3, 0, 10).is_empty());
    }

    #[test]
    fn test_new_rejects_overflowing_edges() {
        assert!(Rect::new(i32::MAX - 2, 0, 4, 1).is_err());
        assert!(Rect::new(0, i32::MAX, 1, 1).is_err());
        assert!(Rect::new(i32::MAX - 3, i32::MAX, 3, 0).is_ok());
        assert!(Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).is_ok());

        let r = Rect::new_unchecked(i32::MAX - 2, 0, 4, 1);
        assert!(!r.edges_fit());
        assert!(!r.is_valid());
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new_unchecked(60, 60, 40, 20);
        let b = Rect::new_unchecked(80, 70, 60, 40);
        assert_eq!(a.intersect(&b), Some(Rect::new_unchecked(80, 70, 20, 10)));

        let c = Rect::new_unchecked(200, 200, 10, 10);
        assert_eq!(a.intersect(&c), None);
        assert!(a.intersected(&c).is_empty());
    }

    #[test]
    fn test_contains() {
        let r = Rect::new_unchecked(-1, -1, 4, 4);
        assert!(r.contains_point(-1, -1));
        assert!(r.contains_point(2, 2));
        assert!(!r.contains_point(3, 2));
        assert!(r.contains_rect(&Rect::new_unchecked(0, 0, 3, 3)));
        assert!(!r.contains_rect(&Rect::new_unchecked(0, 0, 4, 3)));
    }

    #[quickcheck]
    fn prop_intersection_is_contained_in_both(
        ax: i8,
        ay: i8,
        aw: u8,
        ah: u8,
        bx: i8,
        by: i8,
        bw: u8,
        bh: u8,
    ) -> bool {
        let a = small_rect(ax, ay, aw, ah);
        let b = small_rect(bx, by, bw, bh);
        match a.intersect(&b) {
            Some(i) => a.contains_rect(&i) && b.contains_rect(&i) && !i.is_empty(),
            None => !a.overlaps(&b),
        }
    }

    #[quickcheck]
    fn prop_intersection_is_commutative(
        ax: i8,
        ay: i8,
        aw: u8,
        ah: u8,
        bx: i8,
        by: i8,
        bw: u8,
        bh: u8,
    ) -> bool {
        let a = small_rect(ax, ay, aw, ah);
        let b = small_rect(bx, by, bw, bh);
        a.intersect(&b) == b.intersect(&a)
    }

    #[quickcheck]
    fn prop_translate_preserves_area(x: i8, y: i8, w: u8, h: u8, dx: i8, dy: i8) -> bool {
        let r = small_rect(x, y, w, h);
        let t = r.translate(dx as i32, dy as i32);
        t.area() == r.area() && t.x - r.x == dx as i32 && t.y - r.y == dy as i32
    }
}
