//! The coordinate plane and its builder.

use crate::axis::AxisFormatter;
use crate::config::{RenderConfig, ZoomConfig};
use crate::geom::{ScreenPoint, SurfaceSize};
use crate::interaction::InteractionController;
use crate::render::{Frame, FrameInput, build_frame};
use crate::scene::{ObjectId, Point, Vector};
use crate::style::StyleConfig;
use crate::view::ViewState;

/// Owner of the view, style, interaction state and placed objects.
///
/// All pan/zoom mutations go through this type, so a frame built from it
/// always sees a consistent view.
#[derive(Debug, Clone)]
pub struct CoordinatePlane {
    view: ViewState,
    style: StyleConfig,
    render_config: RenderConfig,
    formatter: AxisFormatter,
    controller: InteractionController,
    points: Vec<Point>,
    vectors: Vec<Vector>,
}

impl CoordinatePlane {
    /// Create an empty plane with the default view and dark style.
    pub fn new() -> Self {
        Self {
            view: ViewState::default(),
            style: StyleConfig::default(),
            render_config: RenderConfig::default(),
            formatter: AxisFormatter::default(),
            controller: InteractionController::default(),
            points: Vec::new(),
            vectors: Vec::new(),
        }
    }

    /// Start building a plane with custom configuration.
    pub fn builder() -> PlaneBuilder {
        PlaneBuilder::default()
    }

    /// Access the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Access the view state mutably, e.g. for scale sliders.
    ///
    /// [`ViewState`] setters keep its invariants.
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Restore the default pan, scale and aspect lock.
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Access the style.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Access the style mutably.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Access the render configuration.
    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Access the interaction controller.
    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Access all points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Access all points mutably.
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    /// Access all vectors.
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    /// Access all vectors mutably.
    pub fn vectors_mut(&mut self) -> &mut [Vector] {
        &mut self.vectors
    }

    /// Add a point and return its id.
    pub fn add_point(&mut self, point: Point) -> ObjectId {
        let id = point.id();
        self.points.push(point);
        id
    }

    /// Add a vector and return its id.
    pub fn add_vector(&mut self, vector: Vector) -> ObjectId {
        let id = vector.id();
        self.vectors.push(vector);
        id
    }

    /// Find a point by id.
    pub fn point_mut(&mut self, id: ObjectId) -> Option<&mut Point> {
        self.points.iter_mut().find(|point| point.id() == id)
    }

    /// Find a vector by id.
    pub fn vector_mut(&mut self, id: ObjectId) -> Option<&mut Vector> {
        self.vectors.iter_mut().find(|vector| vector.id() == id)
    }

    /// Remove a point, keeping the order of the rest.
    pub fn remove_point(&mut self, id: ObjectId) -> Option<Point> {
        let index = self.points.iter().position(|point| point.id() == id)?;
        Some(self.points.remove(index))
    }

    /// Remove a vector, keeping the order of the rest.
    pub fn remove_vector(&mut self, id: ObjectId) -> Option<Vector> {
        let index = self.vectors.iter().position(|vector| vector.id() == id)?;
        Some(self.vectors.remove(index))
    }

    /// Pointer pressed on the surface.
    pub fn pointer_down(&mut self, pos: ScreenPoint) {
        self.controller.pointer_down(pos);
    }

    /// Pointer moved; pans while dragging. Returns whether the view changed.
    pub fn pointer_move(&mut self, pos: ScreenPoint) -> bool {
        self.controller.pointer_move(pos, &mut self.view)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    /// Wheel notch; positive `delta_y` zooms out. Returns whether the view changed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        self.controller.wheel(delta_y, &mut self.view)
    }

    /// Snapshot of everything a frame is built from.
    pub fn frame_input(&self, surface: SurfaceSize) -> FrameInput<'_> {
        FrameInput {
            view: &self.view,
            style: &self.style,
            points: &self.points,
            vectors: &self.vectors,
            surface,
            config: &self.render_config,
            formatter: &self.formatter,
        }
    }

    /// Build a frame for the given surface size.
    pub fn build_frame(&self, surface: SurfaceSize) -> Frame {
        build_frame(&self.frame_input(surface))
    }
}

impl Default for CoordinatePlane {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a plane before construction.
#[derive(Debug, Default)]
pub struct PlaneBuilder {
    view: ViewState,
    style: StyleConfig,
    render_config: RenderConfig,
    zoom: ZoomConfig,
    formatter: AxisFormatter,
    points: Vec<Point>,
    vectors: Vec<Vector>,
}

impl PlaneBuilder {
    /// Set the initial view.
    pub fn view(mut self, view: ViewState) -> Self {
        self.view = view;
        self
    }

    /// Set the style.
    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set the render configuration.
    pub fn render_config(mut self, config: RenderConfig) -> Self {
        self.render_config = config;
        self
    }

    /// Set the wheel zoom factors.
    pub fn zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the tick label formatter.
    pub fn formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Add a point.
    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Add a vector.
    pub fn vector(mut self, vector: Vector) -> Self {
        self.vectors.push(vector);
        self
    }

    /// Build the plane.
    pub fn build(self) -> CoordinatePlane {
        CoordinatePlane {
            view: self.view,
            style: self.style,
            render_config: self.render_config,
            formatter: self.formatter,
            controller: InteractionController::with_zoom(self.zoom),
            points: self.points,
            vectors: self.vectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_update_remove_objects() {
        let mut plane = CoordinatePlane::new();
        let a = plane.add_point(Point::new(2.0, 3.0).with_label("A"));
        let b = plane.add_point(Point::new(-4.0, 1.0).with_label("B"));
        let v = plane.add_vector(Vector::new(0.0, 0.0, 5.0, 45.0));

        plane.point_mut(a).expect("point a").set_color("#3b82f6");
        assert_eq!(plane.points()[0].color(), "#3b82f6");

        plane.vector_mut(v).expect("vector").set_length(1.0);
        assert_eq!(plane.vectors()[0].length(), 1.0);

        let removed = plane.remove_point(a).expect("removed");
        assert_eq!(removed.label(), "A");
        assert_eq!(plane.points().len(), 1);
        assert_eq!(plane.points()[0].id(), b);
        assert!(plane.remove_point(a).is_none());
        assert!(plane.remove_vector(v).is_some());
    }

    #[test]
    fn batch_edit_through_slices() {
        let mut plane = CoordinatePlane::builder()
            .point(Point::new(0.0, 0.0))
            .point(Point::new(1.0, 1.0))
            .build();
        for point in plane.points_mut() {
            point.set_size(10.0);
        }
        assert!(plane.points().iter().all(|point| point.size() == 10.0));
    }

    #[test]
    fn drag_then_reset() {
        let mut plane = CoordinatePlane::new();
        plane.pointer_down(ScreenPoint::new(10.0, 10.0));
        assert!(plane.pointer_move(ScreenPoint::new(30.0, 0.0)));
        plane.pointer_up();
        assert!(plane.wheel(-1.0));
        assert_eq!(plane.view().origin_offset_x(), 20.0);
        assert_eq!(plane.view().origin_offset_y(), -10.0);

        plane.reset_view();
        assert_eq!(*plane.view(), ViewState::default());
    }

    #[test]
    fn leaving_mid_drag_does_not_jump_on_reentry() {
        let mut plane = CoordinatePlane::new();
        plane.pointer_down(ScreenPoint::new(10.0, 10.0));
        plane.pointer_move(ScreenPoint::new(20.0, 10.0));
        plane.pointer_leave();
        assert!(!plane.controller().is_dragging());
        // Re-entering with the button still held must not pan by the gap.
        assert!(!plane.pointer_move(ScreenPoint::new(300.0, 300.0)));
        assert_eq!(plane.view().origin_offset_x(), 10.0);
        assert_eq!(plane.view().origin_offset_y(), 0.0);
    }

    #[test]
    fn builder_zoom_config_is_used() {
        let mut plane = CoordinatePlane::builder()
            .zoom(ZoomConfig {
                zoom_in_factor: 2.0,
                zoom_out_factor: 0.5,
            })
            .build();
        plane.wheel(-1.0);
        assert_eq!(plane.view().unit_size_x(), 120.0);
    }

    #[test]
    fn frame_reflects_latest_mutation() {
        let mut plane = CoordinatePlane::new();
        plane.add_point(Point::new(0.0, 0.0));
        let size = SurfaceSize::new(800.0, 600.0);
        assert_eq!(plane.build_frame(size).stats.points_drawn, 1);
        plane.points_mut()[0].set_visible(false);
        assert_eq!(plane.build_frame(size).stats.points_drawn, 0);
    }
}
