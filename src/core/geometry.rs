//! World-space rectangles and the AABB overlap test.
//!
//! Both the player body and every obstacle reduce to the same `Rect` shape
//! for collision purposes; type-specific fields live on their own structs.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict AABB overlap. Rectangles that merely touch at an edge
    /// (`a.x + a.width == b.x`) do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Test a body against an ordered sequence of rectangles and report the
/// index of the first overlap, if any.
pub fn first_hit<I>(body: &Rect, rects: I) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    rects.into_iter().position(|r| body.overlaps(&r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_rects_overlap() {
        let a = Rect::new(10.0, 10.0, 40.0, 40.0);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_disjoint_on_x_axis_never_overlap() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(100.0, 0.0, 40.0, 40.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_on_y_axis_never_overlap() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(0.0, 200.0, 40.0, 40.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_one_pixel_overlap_on_both_axes() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let b = Rect::new(39.0, 39.0, 40.0, 40.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_edge_contact_is_not_a_collision() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        // b starts exactly where a ends on the x axis
        let b = Rect::new(40.0, 0.0, 40.0, 40.0);
        assert!(!a.overlaps(&b));

        // Same on the y axis
        let c = Rect::new(0.0, 40.0, 40.0, 40.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(30.0, 30.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_first_hit_reports_first_index() {
        let body = Rect::new(0.0, 0.0, 40.0, 40.0);
        let rects = vec![
            Rect::new(200.0, 0.0, 40.0, 40.0),
            Rect::new(20.0, 20.0, 40.0, 40.0),
            Rect::new(10.0, 10.0, 40.0, 40.0),
        ];
        assert_eq!(first_hit(&body, rects.iter().copied()), Some(1));
    }

    #[test]
    fn test_first_hit_none_when_clear() {
        let body = Rect::new(0.0, 0.0, 40.0, 40.0);
        let rects = vec![Rect::new(500.0, 0.0, 40.0, 40.0)];
        assert_eq!(first_hit(&body, rects.iter().copied()), None);
    }

    #[test]
    fn test_first_hit_empty_sequence() {
        let body = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert_eq!(first_hit(&body, std::iter::empty()), None);
    }
}
