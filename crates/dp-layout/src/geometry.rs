//! Widget geometry

use serde::{Deserialize, Serialize};

/// Axis-aligned widget bounds in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl WidgetRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Whether the rectangle covers any area
    pub fn has_area(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Anything with widget bounds
pub trait Bounded {
    fn bounds(&self) -> WidgetRect;
}

impl Bounded for WidgetRect {
    fn bounds(&self) -> WidgetRect {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let rect = WidgetRect::new(6.0, 3.0, 6.0, 9.0);
        assert_eq!(rect.center(), (9.0, 7.5));
        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.bottom(), 12.0);
    }

    #[test]
    fn test_has_area() {
        assert!(WidgetRect::new(0.0, 0.0, 1.0, 1.0).has_area());
        assert!(!WidgetRect::new(0.0, 0.0, 0.0, 1.0).has_area());
    }
}
