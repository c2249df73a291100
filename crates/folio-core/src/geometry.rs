#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are CSS pixels in document coordinates (origin at the top-left
//! of the page, y grows downward). Unlike terminal cells these are `f64`, so
//! rectangles can sit at fractional offsets.

/// A point in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Edge offsets, in the same order as the CSS shorthand
/// (`top right bottom left`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// Create insets from the four edges.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Zero on every edge.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// CSS shorthand, e.g. `0px 0px -100px 0px`.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area in square pixels. Negative extents count as zero.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Zero (or negative) area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Edge-inclusive point containment.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Overlap with another rectangle.
    ///
    /// Returns `None` when the rectangles are disjoint. Rectangles that only
    /// share an edge produce a zero-area intersection, which still counts as
    /// touching.
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Grow (positive) or shrink (negative) each edge, CSS-margin style.
    ///
    /// Shrinking past zero collapses the extent to zero instead of flipping.
    #[must_use]
    pub fn outset(&self, insets: Insets) -> Rect {
        let x = self.x - insets.left;
        let y = self.y - insets.top;
        let width = (self.width + insets.left + insets.right).max(0.0);
        let height = (self.height + insets.top + insets.bottom).max(0.0);
        Rect::new(x, y, width, height)
    }

    /// Shift vertically.
    #[inline]
    #[must_use]
    pub fn translate_y(&self, dy: f64) -> Rect {
        Rect::new(self.x, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_overlapping_rects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 25.0, 100.0, 100.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(50.0, 25.0, 50.0, 75.0)));
    }

    #[test]
    fn disjoint_rects_have_no_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 20.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn touching_rects_have_empty_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(0.0, 10.0, 10.0, 10.0);
        let inter = a.intersection(&b).expect("edges touch");
        assert!(inter.is_empty());
        assert_eq!(inter.area(), 0.0);
    }

    #[test]
    fn negative_bottom_outset_shrinks() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let root = viewport.outset(Insets::new(0.0, 0.0, -100.0, 0.0));
        assert_eq!(root, Rect::new(0.0, 0.0, 1280.0, 700.0));
    }

    #[test]
    fn outset_never_flips() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).outset(Insets::new(0.0, 0.0, -50.0, 0.0));
        assert_eq!(r.height, 0.0);
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.5, 0.0)));
    }

    #[test]
    fn insets_css_shorthand() {
        assert_eq!(
            Insets::new(0.0, 0.0, -100.0, 0.0).css(),
            "0px 0px -100px 0px"
        );
    }
}
