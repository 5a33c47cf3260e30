//! Rendering primitives and the frame pipeline.
//!
//! These types are backend-agnostic. A frame is described as an ordered list
//! of [`RenderCommand`]s; later commands draw on top of earlier ones. Render
//! backends (such as the GPUI backend) replay the list onto a real surface.

mod frame;

pub use frame::{Frame, FrameInput, FrameStats, build_frame};

use thiserror::Error;
use tracing::trace;

use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

/// Errors from parsing a CSS hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string does not start with `#`.
    #[error("color must start with '#'")]
    MissingHash,
    /// The digit count is not 3, 4, 6 or 8.
    #[error("expected 3, 4, 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),
    /// A character is not a hex digit.
    #[error("invalid hex digit in color")]
    InvalidDigit,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// CSS color names and functional forms like `rgb(..)` are rejected with
    /// [`ColorParseError::MissingHash`].
    pub fn parse_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits = text
            .trim()
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingHash)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit);
        }
        let nibble = |index: usize| -> Result<u8, ColorParseError> {
            let value = u8::from_str_radix(&digits[index..=index], 16)
                .map_err(|_| ColorParseError::InvalidDigit)?;
            Ok(value * 17)
        };
        let byte = |index: usize| -> Result<u8, ColorParseError> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit)
        };
        match digits.len() {
            3 => Ok(Self::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Ok(Self::from_rgba8(
                nibble(0)?,
                nibble(1)?,
                nibble(2)?,
                nibble(3)?,
            )),
            6 => Ok(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Parse a hex color, using `fallback` when the text is malformed.
    pub fn parse_or(text: &str, fallback: Self) -> Self {
        match Self::parse_hex(text) {
            Ok(color) => color,
            Err(err) => {
                trace!(color = text, %err, "falling back to default color");
                fallback
            }
        }
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Position marks the left edge.
    #[default]
    Left,
    /// Position marks the horizontal centre.
    Center,
    /// Position marks the right edge.
    Right,
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    /// Horizontal anchoring.
    pub align: TextAlign,
    /// Bold weight.
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            align: TextAlign::Left,
            bold: false,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill a rectangle.
    Fill {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Fill color.
        color: Color,
    },
    /// Draw line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Fill a closed polygon (arrowheads).
    Polygon {
        /// Vertices in drawing order.
        points: Vec<ScreenPoint>,
        /// Fill color.
        color: Color,
    },
    /// Fill a circle.
    Circle {
        /// Circle centre.
        center: ScreenPoint,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// Draw text. The position is the baseline anchor.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands in the list.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
