use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, FontWeight, PathBuilder, Pixels, Point, TextRun,
    Window, font, point, px, quad,
};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{Color, Frame, LineSegment, LineStyle, RenderCommand, TextAlign, TextStyle};

pub(crate) fn paint_frame(frame: &Frame, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    for command in frame.render.commands() {
        match command {
            RenderCommand::Fill { rect, color } => {
                paint_fill(window, origin, *rect, *color);
            }
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, origin, segments, *style);
            }
            RenderCommand::Polygon { points, color } => {
                paint_polygon(window, origin, points, *color);
            }
            RenderCommand::Circle {
                center,
                radius,
                color,
            } => {
                paint_circle(window, origin, *center, *radius, *color);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, origin, *position, text, style);
            }
        }
    }
}

fn paint_fill(window: &mut Window, origin: Point<Pixels>, rect: ScreenRect, color: Color) {
    let bounds = Bounds::from_corners(to_point(origin, rect.min), to_point(origin, rect.max));
    window.paint_quad(quad(
        bounds,
        Corners::all(px(0.0)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_lines(
    window: &mut Window,
    origin: Point<Pixels>,
    segments: &[LineSegment],
    style: LineStyle,
) {
    if segments.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width));
    for segment in segments {
        builder.move_to(to_point(origin, segment.start));
        builder.line_to(to_point(origin, segment.end));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_polygon(window: &mut Window, origin: Point<Pixels>, points: &[ScreenPoint], color: Color) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    let mut builder = PathBuilder::fill();
    builder.move_to(to_point(origin, *first));
    for pt in rest {
        builder.line_to(to_point(origin, *pt));
    }
    builder.close();
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(color));
    }
}

fn paint_circle(
    window: &mut Window,
    origin: Point<Pixels>,
    center: ScreenPoint,
    radius: f64,
    color: Color,
) {
    let min = ScreenPoint::new(center.x - radius, center.y - radius);
    let max = ScreenPoint::new(center.x + radius, center.y + radius);
    let bounds = Bounds::from_corners(to_point(origin, min), to_point(origin, max));
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius as f32)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: Point<Pixels>,
    position: ScreenPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let mut run_font = font(".SystemUIFont");
    if style.bold {
        run_font.weight = FontWeight::BOLD;
    }
    let run = TextRun {
        len: text.len(),
        font: run_font,
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let width = f32::from(shaped.width);
    let shift = match style.align {
        TextAlign::Left => 0.0,
        TextAlign::Center => width * 0.5,
        TextAlign::Right => width,
    };
    // Commands anchor text at the baseline; gpui paints from the line top.
    let line_height = shaped.ascent + shaped.descent;
    let top_left = point(
        origin.x + px(position.x as f32 - shift),
        origin.y + px(position.y as f32) - shaped.ascent,
    );
    let _ = shaped.paint(top_left, line_height, window, cx);
}

fn to_point(origin: Point<Pixels>, pt: ScreenPoint) -> Point<Pixels> {
    point(origin.x + px(pt.x as f32), origin.y + px(pt.y as f32))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
