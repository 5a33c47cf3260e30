//! GPUI integration for gpui_coordplane.
//!
//! This module provides a GPUI view that renders a
//! [`CoordinatePlane`](crate::plane::CoordinatePlane) every frame and routes
//! mouse drag and wheel input to its pan and zoom handlers.

mod config;
mod paint;
mod view;

pub use config::PlaneViewConfig;
pub use view::{GpuiPlaneView, PlaneHandle};
