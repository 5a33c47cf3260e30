use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, ScrollWheelEvent,
    Window, canvas, div, px,
};

use crate::geom::{ScreenPoint, ScreenRect, SurfaceSize};
use crate::plane::CoordinatePlane;
use crate::scheduler::{FrameRequest, FrameScheduler};
use crate::surface::Surface;

use super::config::PlaneViewConfig;
use super::paint::paint_frame;

#[derive(Debug, Default)]
struct FrameRuntime {
    scheduler: FrameScheduler,
    surface: Surface,
    request: FrameRequest,
    /// Canvas bounds in window coordinates, from the last prepaint.
    hitbox: Option<ScreenRect>,
}

/// A GPUI view that renders a [`CoordinatePlane`] and handles drag-to-pan
/// and wheel zoom.
///
/// Frames are driven by a [`FrameScheduler`]; the view starts it on
/// construction and [`GpuiPlaneView::stop`] ends it.
#[derive(Clone)]
pub struct GpuiPlaneView {
    plane: Arc<RwLock<CoordinatePlane>>,
    runtime: Arc<RwLock<FrameRuntime>>,
    config: PlaneViewConfig,
}

impl GpuiPlaneView {
    /// Create a new GPUI view for the given plane.
    ///
    /// Uses the default [`PlaneViewConfig`].
    pub fn new(plane: CoordinatePlane) -> Self {
        Self::with_config(plane, PlaneViewConfig::default())
    }

    /// Create a new GPUI view with a custom configuration.
    pub fn with_config(plane: CoordinatePlane, config: PlaneViewConfig) -> Self {
        let mut runtime = FrameRuntime::default();
        runtime.scheduler.start(&mut runtime.request);
        Self {
            plane: Arc::new(RwLock::new(plane)),
            runtime: Arc::new(RwLock::new(runtime)),
            config,
        }
    }

    /// Get a handle for mutating the underlying plane.
    ///
    /// This is useful for editing objects from other views or async tasks.
    pub fn plane_handle(&self) -> PlaneHandle {
        PlaneHandle {
            plane: Arc::clone(&self.plane),
        }
    }

    /// Resume frame production.
    pub fn start(&self, cx: &mut Context<Self>) {
        let mut runtime = self.runtime.write().expect("frame runtime lock");
        let FrameRuntime {
            scheduler, request, ..
        } = &mut *runtime;
        scheduler.start(request);
        cx.notify();
    }

    /// Stop frame production. The last frame stays on screen.
    pub fn stop(&self) {
        let mut runtime = self.runtime.write().expect("frame runtime lock");
        let FrameRuntime {
            scheduler, request, ..
        } = &mut *runtime;
        scheduler.stop(request);
    }

    /// Whether frames are being produced.
    pub fn is_running(&self) -> bool {
        self.runtime
            .read()
            .expect("frame runtime lock")
            .scheduler
            .is_running()
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let mut plane = self.plane.write().expect("plane lock");
        plane.pointer_down(screen_point(ev.position));
        cx.notify();
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let hitbox = self.runtime.read().expect("frame runtime lock").hitbox;
        let mut plane = self.plane.write().expect("plane lock");
        if !plane.controller().is_dragging() {
            return;
        }
        // The release happened outside the view.
        if ev.pressed_button != Some(MouseButton::Left) {
            plane.pointer_leave();
            return;
        }
        let pos = screen_point(ev.position);
        // Leaving the surface ends the drag even with the button held.
        if hitbox.is_some_and(|rect| !rect.contains(pos)) {
            plane.pointer_leave();
            return;
        }
        if plane.pointer_move(pos) {
            cx.notify();
        }
    }

    fn on_hover(&mut self, hovered: bool, cx: &mut Context<Self>) {
        if hovered {
            return;
        }
        let mut plane = self.plane.write().expect("plane lock");
        if plane.controller().is_dragging() {
            plane.pointer_leave();
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, _ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let mut plane = self.plane.write().expect("plane lock");
        plane.pointer_up();
        cx.notify();
    }

    fn on_scroll(&mut self, ev: &ScrollWheelEvent, cx: &mut Context<Self>) {
        let delta = ev.delta.pixel_delta(px(self.config.scroll_line_height));
        // Trackpad gesture phase markers carry no movement.
        if delta.x == px(0.0) && delta.y == px(0.0) {
            return;
        }
        let delta_y = f64::from(f32::from(delta.y));
        let mut plane = self.plane.write().expect("plane lock");
        if plane.wheel(delta_y) {
            cx.notify();
        }
    }
}

impl Render for GpuiPlaneView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let plane = Arc::clone(&self.plane);
        let runtime = Arc::clone(&self.runtime);
        let animate = self.config.animate;

        div()
            .id("coordinate-plane")
            .size_full()
            .child(
                canvas(
                    move |bounds, window, _| {
                        let plane = plane.read().expect("plane lock");
                        let mut runtime = runtime.write().expect("frame runtime lock");
                        let FrameRuntime {
                            scheduler,
                            surface,
                            request,
                            hitbox,
                        } = &mut *runtime;
                        *hitbox = Some(ScreenRect::new(
                            screen_point(bounds.origin),
                            screen_point(bounds.bottom_right()),
                        ));
                        let logical = SurfaceSize::new(
                            f64::from(f32::from(bounds.size.width)),
                            f64::from(f32::from(bounds.size.height)),
                        );
                        let scale_factor = f64::from(window.scale_factor());
                        if let Some(token) = request.take().or(scheduler.active_token()) {
                            scheduler.tick(token, &plane, surface, logical, scale_factor, request);
                        }
                        if animate && request.pending().is_some() {
                            window.request_animation_frame();
                        }
                        (bounds.origin, surface.frame().cloned())
                    },
                    move |_, (origin, frame), window, cx| {
                        if let Some(frame) = frame {
                            paint_frame(&frame, origin, window, cx);
                        }
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                this.on_hover(*hovered, cx);
            }))
            .on_scroll_wheel(cx.listener(|this, ev, _, cx| {
                this.on_scroll(ev, cx);
            }))
    }
}

/// A handle for mutating a [`CoordinatePlane`] held inside a `GpuiPlaneView`.
///
/// The handle clones cheaply and can be moved into async tasks. Changes show
/// up on the next frame.
#[derive(Clone)]
pub struct PlaneHandle {
    plane: Arc<RwLock<CoordinatePlane>>,
}

impl PlaneHandle {
    /// Read the plane state.
    ///
    /// The plane is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&CoordinatePlane) -> R) -> R {
        let plane = self.plane.read().expect("plane lock");
        f(&plane)
    }

    /// Mutate the plane state.
    ///
    /// The plane is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut CoordinatePlane) -> R) -> R {
        let mut plane = self.plane.write().expect("plane lock");
        f(&mut plane)
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f64::from(f32::from(point.x)), f64::from(f32::from(point.y)))
}
