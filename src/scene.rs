//! Points and vectors placed on the plane.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::geom::WorldPoint;

static OBJECT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a point or vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        Self(OBJECT_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A labelled dot at a world position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: ObjectId,
    x: f64,
    y: f64,
    color: String,
    size: f64,
    label: String,
    visible: bool,
}

impl Point {
    /// Create a visible white point of radius 6 with no label.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: ObjectId::next(),
            x,
            y,
            color: "#ffffff".to_string(),
            size: 6.0,
            label: String::new(),
            visible: true,
        }
    }

    /// Set the fill color as a `#`-prefixed hex string.
    ///
    /// Anything else, including CSS color names, renders in the default white.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the radius in pixels.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// World position.
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Fill color as entered.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Radius in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Label text, possibly empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the point is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Move the point.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Change the fill color.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Change the radius.
    pub fn set_size(&mut self, size: f64) {
        self.size = size;
    }

    /// Change the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Show or hide the point.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// An arrow anchored at a world position, given by length and angle.
///
/// The end point is always derived from the start, length and angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    id: ObjectId,
    start_x: f64,
    start_y: f64,
    length: f64,
    angle: f64,
    color: String,
    thickness: f64,
    arrow_size: f64,
    label: String,
    label_position: f64,
    visible: bool,
}

impl Vector {
    /// Create a vector starting at `(start_x, start_y)`.
    ///
    /// `angle` is in degrees, counter-clockwise from the positive X axis.
    pub fn new(start_x: f64, start_y: f64, length: f64, angle: f64) -> Self {
        Self {
            id: ObjectId::next(),
            start_x,
            start_y,
            length,
            angle,
            color: "#f59e0b".to_string(),
            thickness: 2.0,
            arrow_size: 10.0,
            label: String::new(),
            label_position: 0.5,
            visible: true,
        }
    }

    /// Set the stroke and arrowhead color as a `#`-prefixed hex string.
    ///
    /// Anything else, including CSS color names, renders in the default amber.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the shaft thickness in pixels.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the arrowhead length in pixels.
    pub fn with_arrow_size(mut self, arrow_size: f64) -> Self {
        self.arrow_size = arrow_size;
        self
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the label position as a fraction along the shaft.
    pub fn with_label_position(mut self, position: f64) -> Self {
        self.label_position = position;
        self
    }

    /// Set visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// World start position.
    pub fn start(&self) -> WorldPoint {
        WorldPoint::new(self.start_x, self.start_y)
    }

    /// World end position, `start + length * (cos θ, sin θ)`.
    pub fn end(&self) -> WorldPoint {
        let radians = self.angle.to_radians();
        WorldPoint::new(
            self.start_x + self.length * radians.cos(),
            self.start_y + self.length * radians.sin(),
        )
    }

    /// Length in world units.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Stroke color as entered.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Shaft thickness in pixels.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Arrowhead length in pixels.
    pub fn arrow_size(&self) -> f64 {
        self.arrow_size
    }

    /// Label text, possibly empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label position along the shaft. Not clamped.
    pub fn label_position(&self) -> f64 {
        self.label_position
    }

    /// Whether the vector is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Move the start point.
    pub fn set_start(&mut self, x: f64, y: f64) {
        self.start_x = x;
        self.start_y = y;
    }

    /// Change the length.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    /// Change the angle in degrees.
    pub fn set_angle(&mut self, angle: f64) {
        self.angle = angle;
    }

    /// Change the color.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Change the shaft thickness.
    pub fn set_thickness(&mut self, thickness: f64) {
        self.thickness = thickness;
    }

    /// Change the arrowhead size.
    pub fn set_arrow_size(&mut self, arrow_size: f64) {
        self.arrow_size = arrow_size;
    }

    /// Change the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Change the label position.
    pub fn set_label_position(&mut self, position: f64) {
        self.label_position = position;
    }

    /// Show or hide the vector.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
