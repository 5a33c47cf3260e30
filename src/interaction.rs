//! Pointer and wheel handling for panning and zooming.
//!
//! The controller is a two-state machine. It never owns the view; every
//! handler receives the view mutably and applies exactly one mutation, so a
//! render pass never observes a half-applied pan or zoom.

use crate::config::ZoomConfig;
use crate::geom::ScreenPoint;
use crate::view::ViewState;

/// Drag state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held.
    #[default]
    Idle,
    /// Button held; `last` is the previous pointer position.
    Dragging {
        /// Pointer position at the previous event.
        last: ScreenPoint,
    },
}

/// Pan/zoom state machine.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: DragState,
    zoom: ZoomConfig,
}

impl InteractionController {
    /// Create an idle controller with default zoom factors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle controller with custom zoom factors.
    pub fn with_zoom(zoom: ZoomConfig) -> Self {
        Self {
            state: DragState::Idle,
            zoom,
        }
    }

    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Zoom factors in use.
    pub fn zoom_config(&self) -> ZoomConfig {
        self.zoom
    }

    /// Begin a drag at `pos`.
    pub fn pointer_down(&mut self, pos: ScreenPoint) {
        self.state = DragState::Dragging { last: pos };
    }

    /// Pan by the pointer delta while dragging.
    ///
    /// Returns whether the view changed.
    pub fn pointer_move(&mut self, pos: ScreenPoint, view: &mut ViewState) -> bool {
        let DragState::Dragging { last } = self.state else {
            return false;
        };
        if !pos.is_finite() {
            return false;
        }
        view.pan_by(pos.x - last.x, pos.y - last.y);
        self.state = DragState::Dragging { last: pos };
        true
    }

    /// End a drag.
    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    /// The pointer left the surface; ends any drag.
    pub fn pointer_leave(&mut self) {
        self.state = DragState::Idle;
    }

    /// Apply one wheel notch. Positive `delta_y` zooms out, anything else
    /// (zero included) zooms in.
    ///
    /// Zoom is anchored at the pan origin, not at the cursor. Returns whether
    /// the view changed, which is false only when already at the clamp bound.
    pub fn wheel(&mut self, delta_y: f64, view: &mut ViewState) -> bool {
        let factor = if delta_y > 0.0 {
            self.zoom.zoom_out_factor
        } else {
            self.zoom.zoom_in_factor
        };
        let before = *view;
        view.zoom_by(factor);
        *view != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{MAX_UNIT_SIZE, MIN_UNIT_SIZE};

    #[test]
    fn drag_pans_by_cumulative_delta() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        view.set_origin_offset(5.0, -3.0);

        controller.pointer_down(ScreenPoint::new(100.0, 100.0));
        let path = [(110.0, 95.0), (140.5, 80.0), (90.0, 130.25)];
        for (x, y) in path {
            assert!(controller.pointer_move(ScreenPoint::new(x, y), &mut view));
        }
        controller.pointer_up();

        assert_eq!(view.origin_offset_x(), 5.0 + (90.0 - 100.0));
        assert_eq!(view.origin_offset_y(), -3.0 + (130.25 - 100.0));
        assert_eq!(controller.state(), DragState::Idle);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        assert!(!controller.pointer_move(ScreenPoint::new(50.0, 50.0), &mut view));
        assert_eq!(view, ViewState::new());
    }

    #[test]
    fn leaving_surface_ends_drag() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        controller.pointer_down(ScreenPoint::new(0.0, 0.0));
        assert!(controller.is_dragging());
        controller.pointer_leave();
        assert!(!controller.is_dragging());
        controller.pointer_move(ScreenPoint::new(20.0, 20.0), &mut view);
        assert_eq!(view.origin_offset_x(), 0.0);
    }

    #[test]
    fn wheel_zooms_in_and_out() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        assert!(controller.wheel(-1.0, &mut view));
        assert!((view.unit_size_x() - 63.6).abs() < 1e-9);
        assert!(controller.wheel(3.0, &mut view));
        assert!((view.unit_size_x() - 63.6 * 0.94).abs() < 1e-9);
    }

    #[test]
    fn zero_wheel_delta_zooms_in() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        assert!(controller.wheel(0.0, &mut view));
        assert!((view.unit_size_x() - 63.6).abs() < 1e-9);
        assert_eq!(view.unit_size_x(), view.unit_size_y());
    }

    #[test]
    fn wheel_at_bound_reports_no_change() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        view.set_unit_size_x(MAX_UNIT_SIZE);
        assert!(!controller.wheel(-1.0, &mut view));
        assert_eq!(view.unit_size_x(), MAX_UNIT_SIZE);
    }

    #[test]
    fn wheel_works_while_dragging() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        controller.pointer_down(ScreenPoint::new(0.0, 0.0));
        controller.wheel(-1.0, &mut view);
        assert!(controller.is_dragging());
        assert!(view.unit_size_x() > 60.0);
    }

    #[test]
    fn unlocked_wheel_clamps_each_axis() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        view.set_lock_aspect_ratio(false);
        view.set_unit_size_y(4990.0);
        controller.wheel(-1.0, &mut view);
        assert_eq!(view.unit_size_y(), MAX_UNIT_SIZE);
        assert!((view.unit_size_x() - 63.6).abs() < 1e-9);
        for _ in 0..200 {
            controller.wheel(1.0, &mut view);
            assert!(view.unit_size_x() >= MIN_UNIT_SIZE);
            assert!(view.unit_size_y() >= MIN_UNIT_SIZE);
        }
        assert_eq!(view.unit_size_x(), MIN_UNIT_SIZE);
    }

    #[test]
    fn locked_wheel_keeps_axes_equal() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        for i in 0..100 {
            controller.wheel(if i % 2 == 0 { -1.0 } else { 2.0 }, &mut view);
            assert_eq!(view.unit_size_x(), view.unit_size_y());
        }
    }

    #[test]
    fn zoom_keeps_origin_offset() {
        let mut controller = InteractionController::new();
        let mut view = ViewState::new();
        view.set_origin_offset(40.0, -12.0);
        controller.wheel(-1.0, &mut view);
        assert_eq!(view.origin_offset_x(), 40.0);
        assert_eq!(view.origin_offset_y(), -12.0);
    }
}
