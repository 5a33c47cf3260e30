//! Coordinate transforms between world and screen space.

use crate::geom::{ScreenPoint, SurfaceSize, WorldPoint};
use crate::view::{Range, ViewState};

/// Transform from world coordinates into screen coordinates.
///
/// Built fresh from the current surface size every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    surface: SurfaceSize,
    center: ScreenPoint,
    unit_x: f64,
    unit_y: f64,
}

impl Transform {
    /// Create a transform for the given view and surface.
    pub fn new(view: &ViewState, surface: SurfaceSize) -> Self {
        let center = ScreenPoint::new(
            surface.width / 2.0 + view.origin_offset_x(),
            surface.height / 2.0 + view.origin_offset_y(),
        );
        Self {
            surface,
            center,
            unit_x: view.unit_size_x(),
            unit_y: view.unit_size_y(),
        }
    }

    /// Access the surface size.
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Screen position of the world origin.
    pub fn origin(&self) -> ScreenPoint {
        self.center
    }

    /// Pixels per world unit on the X axis.
    pub fn unit_x(&self) -> f64 {
        self.unit_x
    }

    /// Pixels per world unit on the Y axis.
    pub fn unit_y(&self) -> f64 {
        self.unit_y
    }

    /// Map a world point into screen space.
    ///
    /// Returns `None` for non-finite input or output.
    pub fn world_to_screen(&self, point: WorldPoint) -> Option<ScreenPoint> {
        if !point.is_finite() {
            return None;
        }
        let screen = ScreenPoint::new(
            self.center.x + point.x * self.unit_x,
            self.center.y - point.y * self.unit_y,
        );
        screen.is_finite().then_some(screen)
    }

    /// Map a screen point into world space.
    pub fn screen_to_world(&self, point: ScreenPoint) -> Option<WorldPoint> {
        if !point.is_finite() {
            return None;
        }
        let world = WorldPoint::new(
            (point.x - self.center.x) / self.unit_x,
            (self.center.y - point.y) / self.unit_y,
        );
        world.is_finite().then_some(world)
    }

    /// Screen X of a world X coordinate.
    pub fn x_to_screen(&self, x: f64) -> f64 {
        self.center.x + x * self.unit_x
    }

    /// Screen Y of a world Y coordinate.
    pub fn y_to_screen(&self, y: f64) -> f64 {
        self.center.y - y * self.unit_y
    }

    /// World ranges covered by the surface on each axis.
    pub fn visible_world(&self) -> (Range, Range) {
        let x = Range::new(
            (0.0 - self.center.x) / self.unit_x,
            (self.surface.width - self.center.x) / self.unit_x,
        );
        let y = Range::new(
            (self.center.y - self.surface.height) / self.unit_y,
            self.center.y / self.unit_y,
        );
        (x, y)
    }
}
