use crate::api::config::LayoutConfig;

/// Size of the render surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface for a viewport: full width, and a fraction of the height that
    /// depends on whether the layout is narrow. Negative or non-finite
    /// viewport values are treated as zero.
    pub fn for_viewport(viewport_width: f32, viewport_height: f32, layout: &LayoutConfig) -> Self {
        let width = sanitize(viewport_width);
        let height = sanitize(viewport_height);
        let factor = if width < layout.narrow_breakpoint {
            layout.narrow_height_factor
        } else {
            layout.wide_height_factor
        };
        Self::new(width, height * factor)
    }

    /// Width / height, or 1.0 for an empty surface.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_uses_eighty_percent() {
        let size = SurfaceSize::for_viewport(1920.0, 1000.0, &LayoutConfig::default());
        assert_eq!(size.width, 1920.0);
        assert!((size.height - 800.0).abs() < 1e-3);
    }

    #[test]
    fn narrow_layout_uses_sixty_percent() {
        let size = SurfaceSize::for_viewport(400.0, 800.0, &LayoutConfig::default());
        assert_eq!(size.width, 400.0);
        assert!((size.height - 480.0).abs() < 1e-3);
    }

    #[test]
    fn breakpoint_is_wide() {
        let size = SurfaceSize::for_viewport(768.0, 1000.0, &LayoutConfig::default());
        assert!((size.height - 800.0).abs() < 1e-3);
    }

    #[test]
    fn aspect_of_empty_surface_is_one() {
        let size = SurfaceSize::for_viewport(-5.0, f32::NAN, &LayoutConfig::default());
        assert_eq!(size.aspect(), 1.0);
    }
}
