//! View state and world ranges.

use tracing::debug;

/// Smallest allowed pixels-per-unit scale.
pub const MIN_UNIT_SIZE: f64 = 2.0;
/// Largest allowed pixels-per-unit scale.
pub const MAX_UNIT_SIZE: f64 = 5000.0;
/// Scale used by a fresh or reset view.
pub const DEFAULT_UNIT_SIZE: f64 = 60.0;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Pan offset and per-axis scale of the plane.
///
/// Unit sizes are always kept in `[MIN_UNIT_SIZE, MAX_UNIT_SIZE]`, and while
/// the aspect ratio is locked both axes share one scale. Every setter enforces
/// those rules, so a `ViewState` observed between calls is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    origin_offset_x: f64,
    origin_offset_y: f64,
    unit_size_x: f64,
    unit_size_y: f64,
    lock_aspect_ratio: bool,
}

impl ViewState {
    /// Create the default view: centred, 60 px per unit, aspect locked.
    pub fn new() -> Self {
        Self {
            origin_offset_x: 0.0,
            origin_offset_y: 0.0,
            unit_size_x: DEFAULT_UNIT_SIZE,
            unit_size_y: DEFAULT_UNIT_SIZE,
            lock_aspect_ratio: true,
        }
    }

    /// Pixel offset of the world origin from the surface centre, X axis.
    pub fn origin_offset_x(&self) -> f64 {
        self.origin_offset_x
    }

    /// Pixel offset of the world origin from the surface centre, Y axis.
    pub fn origin_offset_y(&self) -> f64 {
        self.origin_offset_y
    }

    /// Pixels per world unit on the X axis.
    pub fn unit_size_x(&self) -> f64 {
        self.unit_size_x
    }

    /// Pixels per world unit on the Y axis.
    pub fn unit_size_y(&self) -> f64 {
        self.unit_size_y
    }

    /// Whether both axes share one scale.
    pub fn lock_aspect_ratio(&self) -> bool {
        self.lock_aspect_ratio
    }

    /// Set both origin offsets. Non-finite values are ignored.
    pub fn set_origin_offset(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.origin_offset_x = x;
            self.origin_offset_y = y;
        }
    }

    /// Move the origin by a pixel delta. Non-finite deltas are ignored.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.origin_offset_x += dx;
            self.origin_offset_y += dy;
        }
    }

    /// Set the X scale, clamped. Also sets Y while the aspect ratio is locked.
    pub fn set_unit_size_x(&mut self, value: f64) {
        let Some(value) = clamp_unit_size(value) else {
            return;
        };
        self.unit_size_x = value;
        if self.lock_aspect_ratio {
            self.unit_size_y = value;
        }
    }

    /// Set the Y scale, clamped. Also sets X while the aspect ratio is locked.
    pub fn set_unit_size_y(&mut self, value: f64) {
        let Some(value) = clamp_unit_size(value) else {
            return;
        };
        self.unit_size_y = value;
        if self.lock_aspect_ratio {
            self.unit_size_x = value;
        }
    }

    /// Lock or unlock the aspect ratio.
    ///
    /// Locking copies the X scale onto Y.
    pub fn set_lock_aspect_ratio(&mut self, locked: bool) {
        self.lock_aspect_ratio = locked;
        if locked {
            self.unit_size_y = self.unit_size_x;
        }
    }

    /// Multiply the scale by `factor`, anchored at the pan origin.
    ///
    /// Each axis is clamped independently unless the aspect ratio is locked,
    /// in which case Y follows the clamped X.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let Some(next_x) = clamp_unit_size(self.unit_size_x * factor) else {
            return;
        };
        let next_y = if self.lock_aspect_ratio {
            next_x
        } else {
            match clamp_unit_size(self.unit_size_y * factor) {
                Some(value) => value,
                None => return,
            }
        };
        self.unit_size_x = next_x;
        self.unit_size_y = next_y;
    }

    /// Restore the default view.
    pub fn reset(&mut self) {
        debug!("view reset to defaults");
        *self = Self::new();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_unit_size(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(MIN_UNIT_SIZE, MAX_UNIT_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(view: &ViewState) -> bool {
        (MIN_UNIT_SIZE..=MAX_UNIT_SIZE).contains(&view.unit_size_x())
            && (MIN_UNIT_SIZE..=MAX_UNIT_SIZE).contains(&view.unit_size_y())
    }

    #[test]
    fn setters_clamp_scale() {
        let mut view = ViewState::new();
        view.set_lock_aspect_ratio(false);
        view.set_unit_size_x(1.0);
        view.set_unit_size_y(1e9);
        assert_eq!(view.unit_size_x(), MIN_UNIT_SIZE);
        assert_eq!(view.unit_size_y(), MAX_UNIT_SIZE);
    }

    #[test]
    fn nan_scale_is_ignored() {
        let mut view = ViewState::new();
        view.set_unit_size_x(f64::NAN);
        assert_eq!(view.unit_size_x(), DEFAULT_UNIT_SIZE);
        view.zoom_by(f64::INFINITY);
        assert_eq!(view.unit_size_x(), DEFAULT_UNIT_SIZE);
    }

    #[test]
    fn locked_setter_moves_both_axes() {
        let mut view = ViewState::new();
        view.set_unit_size_y(120.0);
        assert_eq!(view.unit_size_x(), 120.0);
        assert_eq!(view.unit_size_y(), 120.0);
    }

    #[test]
    fn locking_copies_x_onto_y() {
        let mut view = ViewState::new();
        view.set_lock_aspect_ratio(false);
        view.set_unit_size_y(30.0);
        assert_eq!(view.unit_size_x(), 60.0);
        view.set_lock_aspect_ratio(true);
        assert_eq!(view.unit_size_y(), 60.0);
    }

    #[test]
    fn zoom_sequence_stays_in_bounds() {
        let mut view = ViewState::new();
        view.set_lock_aspect_ratio(false);
        view.set_unit_size_y(3.0);
        for _ in 0..500 {
            view.zoom_by(1.06);
            assert!(in_bounds(&view));
        }
        assert_eq!(view.unit_size_x(), MAX_UNIT_SIZE);
        for _ in 0..1000 {
            view.zoom_by(0.94);
            assert!(in_bounds(&view));
        }
        assert_eq!(view.unit_size_y(), MIN_UNIT_SIZE);
    }

    #[test]
    fn locked_zoom_keeps_axes_equal() {
        let mut view = ViewState::new();
        for i in 0..300 {
            let factor = if i % 3 == 0 { 0.94 } else { 1.06 };
            view.zoom_by(factor);
            assert_eq!(view.unit_size_x(), view.unit_size_y());
        }
    }

    #[test]
    fn zoom_in_once_from_default() {
        let mut view = ViewState::new();
        view.zoom_by(1.06);
        assert!((view.unit_size_x() - 63.6).abs() < 1e-9);
        assert!((view.unit_size_y() - 63.6).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut view = ViewState::new();
        view.pan_by(10.0, -4.0);
        view.set_lock_aspect_ratio(false);
        view.set_unit_size_y(400.0);
        view.reset();
        assert_eq!(view, ViewState::default());
    }
}
