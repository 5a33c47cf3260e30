//! The drawable surface a frame is rendered onto.

use tracing::debug;

use crate::geom::SurfaceSize;
use crate::render::Frame;

/// Backing pixel buffer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackingSize {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
}

/// Drawable surface: logical size, device scale, backing buffer size, and the
/// last rendered frame.
///
/// The last frame is what an export routine serializes.
#[derive(Debug, Clone)]
pub struct Surface {
    logical: SurfaceSize,
    scale_factor: f64,
    backing: BackingSize,
    frame: Option<Frame>,
}

impl Surface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self {
            logical: SurfaceSize::new(0.0, 0.0),
            scale_factor: 1.0,
            backing: BackingSize::default(),
            frame: None,
        }
    }

    /// Logical size in pixels.
    pub fn logical_size(&self) -> SurfaceSize {
        self.logical
    }

    /// Device pixels per logical pixel.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Backing buffer size in device pixels.
    pub fn backing_size(&self) -> BackingSize {
        self.backing
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Match the backing buffer to the displayed size and device scale.
    ///
    /// Returns whether the backing buffer changed.
    pub fn resize(&mut self, logical: SurfaceSize, scale_factor: f64) -> bool {
        let scale_factor = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        self.logical = logical;
        self.scale_factor = scale_factor;
        let backing = BackingSize {
            width: device_pixels(logical.width, scale_factor),
            height: device_pixels(logical.height, scale_factor),
        };
        if backing == self.backing {
            return false;
        }
        debug!(
            width = backing.width,
            height = backing.height,
            scale_factor,
            "surface backing resized"
        );
        self.backing = backing;
        true
    }

    pub(crate) fn present(&mut self, frame: Frame) {
        self.frame = Some(frame);
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

fn device_pixels(logical: f64, scale_factor: f64) -> u32 {
    let value = (logical * scale_factor).floor();
    if value.is_finite() && value > 0.0 {
        value.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_follows_scale_factor() {
        let mut surface = Surface::new();
        assert!(surface.resize(SurfaceSize::new(800.5, 600.0), 2.0));
        assert_eq!(
            surface.backing_size(),
            BackingSize {
                width: 1601,
                height: 1200
            }
        );
        assert!(!surface.resize(SurfaceSize::new(800.5, 600.0), 2.0));
        assert!(surface.resize(SurfaceSize::new(800.5, 600.0), 1.5));
        assert_eq!(surface.backing_size().width, 1200);
    }

    #[test]
    fn invalid_scale_falls_back_to_one() {
        let mut surface = Surface::new();
        surface.resize(SurfaceSize::new(100.0, 50.0), f64::NAN);
        assert_eq!(surface.scale_factor(), 1.0);
        assert_eq!(surface.backing_size().width, 100);
    }

    #[test]
    fn negative_size_has_empty_backing() {
        let mut surface = Surface::new();
        surface.resize(SurfaceSize::new(-10.0, 50.0), 1.0);
        assert_eq!(surface.backing_size().width, 0);
        assert_eq!(surface.backing_size().height, 50);
    }
}
