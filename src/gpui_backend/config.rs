/// Configuration for the GPUI plane view.
#[derive(Debug, Clone)]
pub struct PlaneViewConfig {
    /// Line height used to convert line-based wheel deltas to pixels.
    pub scroll_line_height: f32,
    /// Request a new animation frame after every rendered frame.
    ///
    /// When false the view only redraws after input or an explicit notify.
    pub animate: bool,
}

impl Default for PlaneViewConfig {
    fn default() -> Self {
        Self {
            scroll_line_height: 16.0,
            animate: true,
        }
    }
}
