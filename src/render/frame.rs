//! One full redraw of the plane.
//!
//! A frame is rebuilt from scratch on every call; nothing is cached between
//! frames, so any change to the view, style or objects shows up on the next
//! tick.

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::axis::{self, AxisFormatter};
use crate::config::RenderConfig;
use crate::geom::{ScreenPoint, SurfaceSize};
use crate::grid::{self, GridStep};
use crate::scene::{Point, Vector};
use crate::style::StyleConfig;
use crate::transform::Transform;
use crate::view::ViewState;

use super::{Color, LineSegment, LineStyle, RenderCommand, RenderList, TextAlign, TextStyle};

const DEFAULT_POINT_COLOR: Color = Color::WHITE;
const DEFAULT_VECTOR_COLOR: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);

/// Everything a frame is computed from.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    /// Pan and zoom.
    pub view: &'a ViewState,
    /// Colors and toggles.
    pub style: &'a StyleConfig,
    /// Points, drawn above vectors.
    pub points: &'a [Point],
    /// Vectors.
    pub vectors: &'a [Vector],
    /// Logical size of the surface.
    pub surface: SurfaceSize,
    /// Pixel sizes and offsets.
    pub config: &'a RenderConfig,
    /// Tick label formatting.
    pub formatter: &'a AxisFormatter,
}

/// Per-frame object counts.
///
/// Hidden objects are not counted as skipped; skipped objects had non-finite
/// geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Points drawn.
    pub points_drawn: usize,
    /// Points skipped because of non-finite geometry.
    pub points_skipped: usize,
    /// Vectors drawn.
    pub vectors_drawn: usize,
    /// Vectors skipped because of non-finite geometry.
    pub vectors_skipped: usize,
}

/// A fully built frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Draw commands in z-order.
    pub render: RenderList,
    /// Object counts.
    pub stats: FrameStats,
    /// Surface size the frame was built for.
    pub size: SurfaceSize,
}

/// Resolved colors for one frame.
struct Palette {
    bg: Color,
    axis: Color,
    grid_major: Color,
    grid_minor: Color,
    text: Color,
}

impl Palette {
    fn resolve(style: &StyleConfig) -> Self {
        Self {
            bg: Color::parse_or(&style.bg_color, Color::from_rgb8(0x0f, 0x17, 0x2a)),
            axis: Color::parse_or(&style.axis_color, Color::WHITE),
            grid_major: Color::parse_or(
                &style.grid_color_major,
                Color::from_rgb8(0x33, 0x41, 0x55),
            ),
            grid_minor: Color::parse_or(
                &style.grid_color_minor,
                Color::from_rgb8(0x1e, 0x29, 0x3b),
            ),
            text: Color::parse_or(&style.text_color, Color::from_rgb8(0x94, 0xa3, 0xb8)),
        }
    }
}

/// Build one frame.
pub fn build_frame(input: &FrameInput<'_>) -> Frame {
    let mut render = RenderList::new();
    let mut stats = FrameStats::default();
    let surface = input.surface;

    if !surface.is_valid() {
        trace!(?surface, "surface has no area, frame left empty");
        return Frame {
            render,
            stats,
            size: surface,
        };
    }

    let palette = Palette::resolve(input.style);
    let transform = Transform::new(input.view, surface);

    render.push(RenderCommand::Fill {
        rect: surface.rect(),
        color: palette.bg,
    });

    let steps = grid_steps(input.view, input.config);

    if input.style.show_grid {
        if let Some((step_x, step_y)) = steps {
            build_grid(&mut render, &transform, step_x, step_y, &palette, input.config);
        }
    }

    build_axes(&mut render, &transform, &palette, input.config);

    if input.style.show_labels {
        if let Some((step_x, step_y)) = steps {
            build_ticks(
                &mut render,
                &transform,
                step_x,
                step_y,
                &palette,
                input.config,
                input.formatter,
            );
        }
    }

    build_edge_arrows(&mut render, &transform, &palette, input.config);
    build_vectors(&mut render, &mut stats, &transform, input.vectors, input.config);
    build_points(
        &mut render,
        &mut stats,
        &transform,
        input.points,
        &palette,
        input.config,
    );

    if stats.points_skipped > 0 || stats.vectors_skipped > 0 {
        debug!(
            points = stats.points_skipped,
            vectors = stats.vectors_skipped,
            "skipped objects with non-finite geometry"
        );
    }
    trace!(
        commands = render.len(),
        points = stats.points_drawn,
        vectors = stats.vectors_drawn,
        "frame built"
    );

    Frame {
        render,
        stats,
        size: surface,
    }
}

fn grid_steps(view: &ViewState, config: &RenderConfig) -> Option<(GridStep, GridStep)> {
    let x = grid::grid_step(view.unit_size_x(), config.min_grid_gap_px);
    let y = grid::grid_step(view.unit_size_y(), config.min_grid_gap_px);
    match (x, y) {
        (Ok(x), Ok(y)) => Some((x, y)),
        (Err(err), _) | (_, Err(err)) => {
            debug!(%err, "grid step unavailable, skipping grid and ticks");
            None
        }
    }
}

fn build_grid(
    render: &mut RenderList,
    transform: &Transform,
    step_x: GridStep,
    step_y: GridStep,
    palette: &Palette,
    config: &RenderConfig,
) {
    let minor = grid_segments(transform, step_x.minor(), step_y.minor());
    if !minor.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments: minor,
            style: LineStyle {
                color: palette.grid_minor,
                width: config.minor_grid_width,
            },
        });
    }

    let major = grid_segments(transform, step_x.major(), step_y.major());
    if !major.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments: major,
            style: LineStyle {
                color: palette.grid_major,
                width: config.major_grid_width,
            },
        });
    }
}

fn grid_segments(transform: &Transform, step_x: f64, step_y: f64) -> Vec<LineSegment> {
    let size = transform.surface();
    let (x_range, y_range) = transform.visible_world();
    let mut segments = Vec::new();
    for x in grid::grid_lines(step_x, x_range) {
        let sx = transform.x_to_screen(x);
        segments.push(LineSegment::new(
            ScreenPoint::new(sx, 0.0),
            ScreenPoint::new(sx, size.height),
        ));
    }
    for y in grid::grid_lines(step_y, y_range) {
        let sy = transform.y_to_screen(y);
        segments.push(LineSegment::new(
            ScreenPoint::new(0.0, sy),
            ScreenPoint::new(size.width, sy),
        ));
    }
    segments
}

fn build_axes(
    render: &mut RenderList,
    transform: &Transform,
    palette: &Palette,
    config: &RenderConfig,
) {
    let size = transform.surface();
    let origin = transform.origin();
    render.push(RenderCommand::LineSegments {
        segments: vec![
            LineSegment::new(
                ScreenPoint::new(0.0, origin.y),
                ScreenPoint::new(size.width, origin.y),
            ),
            LineSegment::new(
                ScreenPoint::new(origin.x, 0.0),
                ScreenPoint::new(origin.x, size.height),
            ),
        ],
        style: LineStyle {
            color: palette.axis,
            width: config.axis_width,
        },
    });
}

fn build_ticks(
    render: &mut RenderList,
    transform: &Transform,
    step_x: GridStep,
    step_y: GridStep,
    palette: &Palette,
    config: &RenderConfig,
    formatter: &AxisFormatter,
) {
    let origin = transform.origin();
    let (x_range, y_range) = transform.visible_world();
    let x_ticks = axis::ticks(
        &grid::grid_lines(step_x.major(), x_range),
        formatter,
        |x| transform.x_to_screen(x),
    );
    let y_ticks = axis::ticks(
        &grid::grid_lines(step_y.major(), y_range),
        formatter,
        |y| transform.y_to_screen(y),
    );

    let half = config.tick_size;
    let mut marks = Vec::with_capacity(x_ticks.len() + y_ticks.len());
    for tick in &x_ticks {
        marks.push(LineSegment::new(
            ScreenPoint::new(tick.position, origin.y - half),
            ScreenPoint::new(tick.position, origin.y + half),
        ));
    }
    for tick in &y_ticks {
        marks.push(LineSegment::new(
            ScreenPoint::new(origin.x - half, tick.position),
            ScreenPoint::new(origin.x + half, tick.position),
        ));
    }
    if !marks.is_empty() {
        render.push(RenderCommand::LineSegments {
            segments: marks,
            style: LineStyle {
                color: palette.axis,
                width: config.tick_width,
            },
        });
    }

    let label_style = |align| TextStyle {
        color: palette.text,
        size: config.tick_label_size,
        align,
        bold: false,
    };
    for tick in x_ticks {
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(tick.position, origin.y + config.x_label_offset),
            text: tick.label,
            style: label_style(TextAlign::Center),
        });
    }
    for tick in y_ticks {
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(
                origin.x - config.y_label_offset,
                tick.position + config.y_label_baseline,
            ),
            text: tick.label,
            style: label_style(TextAlign::Right),
        });
    }
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(
            origin.x - config.y_label_offset,
            origin.y + config.x_label_offset,
        ),
        text: "0".to_string(),
        style: label_style(TextAlign::Right),
    });
}

/// Outward arrows where the axis lines leave the surface.
fn build_edge_arrows(
    render: &mut RenderList,
    transform: &Transform,
    palette: &Palette,
    config: &RenderConfig,
) {
    let size = transform.surface();
    let origin = transform.origin();
    let tips = [
        (ScreenPoint::new(size.width, origin.y), 0.0),
        (ScreenPoint::new(0.0, origin.y), PI),
        (ScreenPoint::new(origin.x, 0.0), -PI / 2.0),
        (ScreenPoint::new(origin.x, size.height), PI / 2.0),
    ];
    for (tip, angle) in tips {
        render.push(RenderCommand::Polygon {
            points: arrowhead(
                tip,
                angle,
                config.edge_arrow_length,
                config.edge_arrow_half_width,
            ),
            color: palette.axis,
        });
    }
}

fn build_vectors(
    render: &mut RenderList,
    stats: &mut FrameStats,
    transform: &Transform,
    vectors: &[Vector],
    config: &RenderConfig,
) {
    for vector in vectors {
        if !vector.is_visible() {
            continue;
        }
        let Some((start, end)) = vector_geometry(vector, transform) else {
            stats.vectors_skipped += 1;
            continue;
        };
        let color = Color::parse_or(vector.color(), DEFAULT_VECTOR_COLOR);

        render.push(RenderCommand::LineSegments {
            segments: vec![LineSegment::new(start, end)],
            style: LineStyle {
                color,
                width: vector.thickness().max(0.0) as f32,
            },
        });

        // Screen delta, not the stored angle: unit sizes may differ per axis.
        let visual_angle = (end.y - start.y).atan2(end.x - start.x);
        let size = vector.arrow_size().max(0.0);
        render.push(RenderCommand::Polygon {
            points: arrowhead(end, visual_angle, size, size / config.arrowhead_aspect),
            color,
        });

        if !vector.label().is_empty() && vector.label_position().is_finite() {
            let anchor = start
                .lerp(end, vector.label_position())
                .offset(0.0, -config.vector_label_offset);
            render.push(RenderCommand::Text {
                position: anchor,
                text: vector.label().to_string(),
                style: TextStyle {
                    color,
                    size: config.vector_label_size,
                    align: TextAlign::Center,
                    bold: true,
                },
            });
        }
        stats.vectors_drawn += 1;
    }
}

fn vector_geometry(vector: &Vector, transform: &Transform) -> Option<(ScreenPoint, ScreenPoint)> {
    if !vector.thickness().is_finite() || !vector.arrow_size().is_finite() {
        return None;
    }
    let start = transform.world_to_screen(vector.start())?;
    let end = transform.world_to_screen(vector.end())?;
    Some((start, end))
}

fn build_points(
    render: &mut RenderList,
    stats: &mut FrameStats,
    transform: &Transform,
    points: &[Point],
    palette: &Palette,
    config: &RenderConfig,
) {
    for point in points {
        if !point.is_visible() {
            continue;
        }
        let screen = match transform.world_to_screen(point.position()) {
            Some(screen) if point.size().is_finite() => screen,
            _ => {
                stats.points_skipped += 1;
                continue;
            }
        };
        let radius = point.size().max(0.0);
        render.push(RenderCommand::Circle {
            center: screen,
            radius,
            color: Color::parse_or(point.color(), DEFAULT_POINT_COLOR),
        });
        if !point.label().is_empty() {
            let gap = radius + config.point_label_gap;
            render.push(RenderCommand::Text {
                position: screen.offset(gap, -gap),
                text: point.label().to_string(),
                style: TextStyle {
                    color: palette.text,
                    size: config.point_label_size,
                    align: TextAlign::Left,
                    bold: false,
                },
            });
        }
        stats.points_drawn += 1;
    }
}

/// Filled triangle with its tip at `tip`, pointing along `angle`.
fn arrowhead(tip: ScreenPoint, angle: f64, length: f64, half_width: f64) -> Vec<ScreenPoint> {
    let (sin, cos) = angle.sin_cos();
    let rotate = |dx: f64, dy: f64| {
        ScreenPoint::new(tip.x + dx * cos - dy * sin, tip.y + dx * sin + dy * cos)
    };
    vec![tip, rotate(-length, -half_width), rotate(-length, half_width)]
}
