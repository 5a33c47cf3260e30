//! Axis tick placement and label formatting.

use std::sync::Arc;

/// Offsets closer to zero than this are treated as the origin.
const ORIGIN_EPSILON: f64 = 1e-7;

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Round to five decimals and drop trailing float noise.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format_tick(value),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Format a tick value, e.g. `0.30000000000000004` as `0.3`.
pub fn format_tick(value: f64) -> String {
    let fixed = format!("{value:.5}");
    match fixed.parse::<f64>() {
        // Collapses "-0" as well.
        Ok(rounded) if rounded == 0.0 => "0".to_string(),
        Ok(rounded) => rounded.to_string(),
        Err(_) => fixed,
    }
}

/// A labelled tick on one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// World coordinate along the axis.
    pub value: f64,
    /// Screen coordinate along the axis.
    pub position: f64,
    /// Formatted label.
    pub label: String,
}

/// Build ticks for the given grid values, skipping the origin.
///
/// `to_screen` maps a world coordinate onto the axis' screen coordinate.
pub fn ticks(
    values: &[f64],
    formatter: &AxisFormatter,
    to_screen: impl Fn(f64) -> f64,
) -> Vec<Tick> {
    values
        .iter()
        .copied()
        .filter(|value| !is_origin(*value))
        .map(|value| Tick {
            value,
            position: to_screen(value),
            label: formatter.format(value),
        })
        .collect()
}

/// Check whether a grid value coincides with the origin.
pub fn is_origin(value: f64) -> bool {
    value.abs() < ORIGIN_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_drops_float_noise() {
        assert_eq!(format_tick(0.1 + 0.2), "0.3");
        assert_eq!(format_tick(3.0), "3");
        assert_eq!(format_tick(-2.5), "-2.5");
        assert_eq!(format_tick(1e-6), "0");
        assert_eq!(format_tick(-1e-7), "0");
        assert_eq!(format_tick(0.00002), "0.00002");
        assert_eq!(format_tick(250000.0), "250000");
    }

    #[test]
    fn ticks_skip_origin() {
        let values = [-1.0, -0.5, 0.0, 0.5, 1.0];
        let ticks = ticks(&values, &AxisFormatter::Default, |v| 100.0 + v * 10.0);
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, ["-1", "-0.5", "0.5", "1"]);
        assert_eq!(ticks[0].position, 90.0);
    }

    #[test]
    fn custom_formatter_is_used() {
        let formatter = AxisFormatter::Custom(Arc::new(|v| format!("{v}u")));
        let ticks = ticks(&[2.0], &formatter, |v| v);
        assert_eq!(ticks[0].label, "2u");
    }
}
