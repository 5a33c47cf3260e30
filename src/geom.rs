//! Geometric primitives used by the rendering pipeline.
//!
//! World types describe positions on the unbounded mathematical plane. Screen
//! types are pixel positions on the drawable surface, origin top-left with Y
//! growing downward.

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPoint {
    /// X value in world units.
    pub x: f64,
    /// Y value in world units.
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f64,
    /// Y value in screen pixels.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation towards `other`. `t` is not clamped.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Offset by a pixel delta.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether `point` lies inside the rectangle, edges included.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Logical size of a drawable surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Create a new surface size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether the surface has finite, positive area.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// The full surface as a rectangle anchored at the origin.
    pub fn rect(&self) -> ScreenRect {
        ScreenRect::new(
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(self.width, self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges_only() {
        let rect = ScreenRect::new(
            ScreenPoint::new(10.0, 20.0),
            ScreenPoint::new(110.0, 70.0),
        );
        assert!(rect.contains(ScreenPoint::new(10.0, 20.0)));
        assert!(rect.contains(ScreenPoint::new(110.0, 70.0)));
        assert!(rect.contains(ScreenPoint::new(50.0, 50.0)));
        assert!(!rect.contains(ScreenPoint::new(9.5, 50.0)));
        assert!(!rect.contains(ScreenPoint::new(50.0, 70.5)));
        assert!(!rect.contains(ScreenPoint::new(f64::NAN, 50.0)));
    }

    #[test]
    fn lerp_is_not_clamped() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(10.0, -10.0);
        assert_eq!(a.lerp(b, 0.5), ScreenPoint::new(5.0, -5.0));
        assert_eq!(a.lerp(b, 1.5), ScreenPoint::new(15.0, -15.0));
    }

    #[test]
    fn surface_rejects_empty_area() {
        assert!(!SurfaceSize::new(0.0, 100.0).is_valid());
        assert!(!SurfaceSize::new(f64::NAN, 100.0).is_valid());
        assert!(SurfaceSize::new(800.0, 600.0).is_valid());
    }
}
