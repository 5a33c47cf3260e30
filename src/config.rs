//! Tunables for rendering and zooming.

use crate::grid::MIN_GRID_GAP_PX;

/// Sizes and offsets used by the frame pipeline, in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Minimum on-screen gap between major grid lines.
    pub min_grid_gap_px: f64,
    /// Minor grid stroke width.
    pub minor_grid_width: f32,
    /// Major grid stroke width.
    pub major_grid_width: f32,
    /// Axis line stroke width.
    pub axis_width: f32,
    /// Half-length of tick marks.
    pub tick_size: f64,
    /// Tick mark stroke width.
    pub tick_width: f32,
    /// Font size of numeric tick labels.
    pub tick_label_size: f32,
    /// Distance of X tick labels below the X axis (baseline).
    pub x_label_offset: f64,
    /// Distance of Y tick labels left of the Y axis.
    pub y_label_offset: f64,
    /// Baseline shift applied to Y tick labels.
    pub y_label_baseline: f64,
    /// Length of the decorative arrows at the ends of the axes.
    pub edge_arrow_length: f64,
    /// Half-width of the decorative arrows.
    pub edge_arrow_half_width: f64,
    /// Font size of point labels.
    pub point_label_size: f32,
    /// Gap between a point and its label, added to the radius.
    pub point_label_gap: f64,
    /// Font size of vector labels.
    pub vector_label_size: f32,
    /// Distance of vector labels above the shaft.
    pub vector_label_offset: f64,
    /// Ratio of arrowhead length to arrowhead half-width.
    pub arrowhead_aspect: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            min_grid_gap_px: MIN_GRID_GAP_PX,
            minor_grid_width: 0.5,
            major_grid_width: 1.0,
            axis_width: 2.0,
            tick_size: 4.0,
            tick_width: 1.5,
            tick_label_size: 10.0,
            x_label_offset: 18.0,
            y_label_offset: 12.0,
            y_label_baseline: 4.0,
            edge_arrow_length: 10.0,
            edge_arrow_half_width: 5.0,
            point_label_size: 12.0,
            point_label_gap: 4.0,
            vector_label_size: 12.0,
            vector_label_offset: 10.0,
            arrowhead_aspect: 2.5,
        }
    }
}

/// Multiplicative factors applied per wheel notch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    /// Factor applied when scrolling towards the user (zoom in).
    pub zoom_in_factor: f64,
    /// Factor applied when scrolling away from the user (zoom out).
    pub zoom_out_factor: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_in_factor: 1.06,
            zoom_out_factor: 0.94,
        }
    }
}
