//! Grid spacing selection.
//!
//! The step is picked from the 1-2-5 ladder so that adjacent grid lines stay
//! at least roughly [`MIN_GRID_GAP_PX`] apart at any zoom level.

use thiserror::Error;

use crate::view::Range;

/// Target on-screen gap between major grid lines.
pub const MIN_GRID_GAP_PX: f64 = 60.0;

/// Upper bound on the number of lines a single sweep may produce.
pub const MAX_GRID_LINES: usize = 4096;

/// Errors raised by the step calculator.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// The scale was zero, negative, or not finite.
    #[error("invalid grid scale: {0} pixels per unit")]
    InvalidScale(f64),
    /// The requested pixel gap was zero, negative, or not finite.
    #[error("invalid grid gap: {0} pixels")]
    InvalidGap(f64),
}

/// Mantissa of a nice grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NiceNumber {
    /// 1 × 10^k.
    One,
    /// 2 × 10^k.
    Two,
    /// 5 × 10^k.
    Five,
    /// 10 × 10^k.
    Ten,
}

impl NiceNumber {
    /// Quantize a residual in `[1, 10)` onto the ladder.
    pub fn quantize(residual: f64) -> Self {
        if residual < 1.5 {
            Self::One
        } else if residual < 3.5 {
            Self::Two
        } else if residual < 7.5 {
            Self::Five
        } else {
            Self::Ten
        }
    }

    /// Numeric value of the mantissa.
    pub fn value(self) -> f64 {
        match self {
            Self::One => 1.0,
            Self::Two => 2.0,
            Self::Five => 5.0,
            Self::Ten => 10.0,
        }
    }
}

/// A decomposed grid step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStep {
    /// Quantized mantissa.
    pub nice: NiceNumber,
    /// Power of ten the mantissa is scaled by.
    pub magnitude: f64,
}

impl GridStep {
    /// Major step in world units.
    pub fn major(&self) -> f64 {
        self.nice.value() * self.magnitude
    }

    /// Minor step in world units.
    pub fn minor(&self) -> f64 {
        self.major() / 2.0
    }
}

/// Pick a nice world-space step for the given scale.
pub fn calculate_step(pixels_per_unit: f64) -> Result<f64, GridError> {
    calculate_step_with_gap(pixels_per_unit, MIN_GRID_GAP_PX)
}

/// Pick a nice world-space step targeting a custom minimum pixel gap.
pub fn calculate_step_with_gap(pixels_per_unit: f64, gap_px: f64) -> Result<f64, GridError> {
    Ok(grid_step(pixels_per_unit, gap_px)?.major())
}

/// Decompose the step for the given scale into mantissa and magnitude.
pub fn grid_step(pixels_per_unit: f64, gap_px: f64) -> Result<GridStep, GridError> {
    if !pixels_per_unit.is_finite() || pixels_per_unit <= 0.0 {
        return Err(GridError::InvalidScale(pixels_per_unit));
    }
    if !gap_px.is_finite() || gap_px <= 0.0 {
        return Err(GridError::InvalidGap(gap_px));
    }
    let raw_step = gap_px / pixels_per_unit;
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return Err(GridError::InvalidScale(pixels_per_unit));
    }
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    Ok(GridStep {
        nice: NiceNumber::quantize(residual),
        magnitude,
    })
}

/// World coordinates of grid lines covering `range`.
///
/// The sweep starts at the largest multiple of `step` not above `range.min`
/// and stops after the last multiple not above `range.max`. Values are
/// computed as `index * step`, so the origin is hit exactly.
pub fn grid_lines(step: f64, range: Range) -> Vec<f64> {
    let mut lines = Vec::new();
    if !step.is_finite() || step <= 0.0 || !range.is_finite() {
        return lines;
    }
    let first = (range.min / step).floor();
    let last = (range.max / step).floor();
    if !first.is_finite() || !last.is_finite() {
        return lines;
    }
    let count = last - first + 1.0;
    if count <= 0.0 || count > MAX_GRID_LINES as f64 {
        return lines;
    }
    lines.reserve(count as usize);
    let mut index = first;
    while index <= last {
        lines.push(index * step);
        index += 1.0;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_unit_sixty() {
        assert_eq!(calculate_step(60.0), Ok(1.0));
    }

    #[test]
    fn scenario_unit_six() {
        assert_eq!(calculate_step(6.0), Ok(10.0));
    }

    #[test]
    fn thresholds_pick_ladder_values() {
        assert_eq!(NiceNumber::quantize(1.49), NiceNumber::One);
        assert_eq!(NiceNumber::quantize(1.5), NiceNumber::Two);
        assert_eq!(NiceNumber::quantize(3.49), NiceNumber::Two);
        assert_eq!(NiceNumber::quantize(3.5), NiceNumber::Five);
        assert_eq!(NiceNumber::quantize(7.49), NiceNumber::Five);
        assert_eq!(NiceNumber::quantize(7.5), NiceNumber::Ten);
    }

    #[test]
    fn step_keeps_gap_over_valid_scales() {
        let mut ppu = 2.0;
        while ppu <= 5000.0 {
            let step = grid_step(ppu, MIN_GRID_GAP_PX).expect("valid scale");
            assert!(step.major() * ppu >= 30.0, "gap too small at {ppu}");
            assert!(matches!(
                step.nice,
                NiceNumber::One | NiceNumber::Two | NiceNumber::Five | NiceNumber::Ten
            ));
            let exponent = step.magnitude.log10();
            assert!((exponent - exponent.round()).abs() < 1e-9);
            ppu *= 1.013;
        }
    }

    #[test]
    fn rejects_non_positive_scale() {
        assert_eq!(calculate_step(0.0), Err(GridError::InvalidScale(0.0)));
        assert_eq!(calculate_step(-4.0), Err(GridError::InvalidScale(-4.0)));
        assert!(calculate_step(f64::NAN).is_err());
        assert!(calculate_step(f64::INFINITY).is_err());
        assert_eq!(
            calculate_step_with_gap(60.0, 0.0),
            Err(GridError::InvalidGap(0.0))
        );
    }

    #[test]
    fn minor_step_is_half() {
        let step = grid_step(60.0, MIN_GRID_GAP_PX).expect("valid scale");
        assert_eq!(step.minor(), 0.5);
    }

    #[test]
    fn sweep_starts_below_visible_min() {
        let lines = grid_lines(2.0, Range::new(-3.3, 4.0));
        assert_eq!(lines, vec![-4.0, -2.0, 0.0, 2.0, 4.0]);
    }

    #[test]
    fn sweep_far_from_origin() {
        let lines = grid_lines(5.0, Range::new(1001.0, 1014.0));
        assert_eq!(lines, vec![1000.0, 1005.0, 1010.0]);
    }

    #[test]
    fn sweep_rejects_degenerate_input() {
        assert!(grid_lines(0.0, Range::new(0.0, 1.0)).is_empty());
        assert!(grid_lines(1.0, Range::new(f64::NEG_INFINITY, 1.0)).is_empty());
        assert!(grid_lines(1e-9, Range::new(0.0, 1.0)).is_empty());
    }
}
