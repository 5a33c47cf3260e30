//! Presentation settings for the plane.

/// Colors and decoration toggles.
///
/// Colors are CSS hex strings (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).
/// Named colors such as `red` and functional notation such as `rgb(1,2,3)`
/// are not understood. Invalid strings are not rejected here; the renderer
/// falls back to the slot's default color for them and logs at `trace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    /// Background fill.
    pub bg_color: String,
    /// Axis lines, ticks and edge arrows.
    pub axis_color: String,
    /// Major grid lines.
    pub grid_color_major: String,
    /// Minor grid lines.
    pub grid_color_minor: String,
    /// Tick and point labels.
    pub text_color: String,
    /// Draw grid lines.
    pub show_grid: bool,
    /// Draw ticks and numeric labels.
    pub show_labels: bool,
}

impl StyleConfig {
    /// Dark slate palette.
    pub fn dark() -> Self {
        Self {
            bg_color: "#0f172a".to_string(),
            axis_color: "#ffffff".to_string(),
            grid_color_major: "#334155".to_string(),
            grid_color_minor: "#1e293b".to_string(),
            text_color: "#94a3b8".to_string(),
            show_grid: true,
            show_labels: true,
        }
    }

    /// Light palette for printing and export.
    pub fn light() -> Self {
        Self {
            bg_color: "#ffffff".to_string(),
            axis_color: "#0f172a".to_string(),
            grid_color_major: "#cbd5e1".to_string(),
            grid_color_minor: "#e2e8f0".to_string(),
            text_color: "#475569".to_string(),
            show_grid: true,
            show_labels: true,
        }
    }

    /// Toggle grid lines.
    pub fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Toggle ticks and labels.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::dark()
    }
}
