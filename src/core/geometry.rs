//=========================================================================
// Geometry
//=========================================================================
//
// Minimal 2D rectangle type used for component anchors and hit testing.
//
// Every interactive component is anchored to a page region. Anchors are
// optional: a component constructed without one reports itself inactive
// and ignores all input (a single script serves several page types, most
// components are simply absent on any given page).
//
//=========================================================================

//=== Rect ================================================================

/// Axis-aligned rectangle in page coordinates (pixels, top-left origin).
///
/// Containment is half-open: the left/top edges are inside, the
/// right/bottom edges are not. Adjacent regions therefore never both
/// claim a boundary point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns `true` if the point lies inside this rectangle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Vertical center of the rectangle.
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_interior_point() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(50.0, 40.0));
    }

    #[test]
    fn excludes_far_edges() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(!r.contains(100.0, 10.0));
        assert!(!r.contains(10.0, 50.0));
    }

    #[test]
    fn excludes_outside_points() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!r.contains(-1.0, 5.0));
        assert!(!r.contains(5.0, -1.0));
        assert!(!r.contains(11.0, 11.0));
    }

    #[test]
    fn center_y_is_vertical_midpoint() {
        let r = Rect::new(0.0, 100.0, 40.0, 60.0);
        assert_eq!(r.center_y(), 130.0);
    }
}
