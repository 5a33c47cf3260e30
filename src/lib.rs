//! gpui_coordplane is an interactive 2-D coordinate plane built for GPUI.
//! The core maps a pannable, zoomable world onto a surface, picks readable
//! grid spacing, and builds a backend-agnostic list of draw commands every
//! frame. The `gpui` feature adds a view that paints those commands.

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod geom;
pub mod grid;
pub mod interaction;
pub mod plane;
pub mod render;
pub mod scene;
pub mod scheduler;
pub mod style;
pub mod surface;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{AxisFormatter, Tick};
pub use config::{RenderConfig, ZoomConfig};
pub use geom::{ScreenPoint, ScreenRect, SurfaceSize, WorldPoint};
pub use grid::{GridError, GridStep, NiceNumber, calculate_step, grid_lines, grid_step};
pub use interaction::{DragState, InteractionController};
pub use plane::{CoordinatePlane, PlaneBuilder};
pub use render::{
    Color, ColorParseError, Frame, FrameInput, FrameStats, LineSegment, LineStyle, RenderCommand,
    RenderList, TextAlign, TextStyle, build_frame,
};
pub use scene::{ObjectId, Point, Vector};
pub use scheduler::{FrameClock, FrameRequest, FrameScheduler, FrameToken, TickOutcome};
pub use style::StyleConfig;
pub use surface::{BackingSize, Surface};
pub use transform::Transform;
pub use view::{Range, ViewState};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiPlaneView, PlaneHandle, PlaneViewConfig};
