use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::{point::Point, range::Range, resolution::Resolution};
use crate::{error::RenderError, result::RenderResult};

/// Base extents of the plane at `zoom == 1`, before aspect correction.
pub const BASE_MIN_RE: f64 = -2.0;
pub const BASE_MAX_RE: f64 = 1.0;
pub const BASE_IM_EXTENT: f64 = 1.5;

/// The visible region of the complex plane, described by a magnification and
/// a translation. Bounds are derived per resolution, see [`Viewport::bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Viewport {
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> RenderResult<Self> {
        if !zoom.is_finite() || zoom <= 0.0 || !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(RenderError::InvalidViewport {
                zoom,
                offset_x,
                offset_y,
            });
        }
        Ok(Self {
            zoom,
            offset_x,
            offset_y,
        })
    }

    /// Plane bounds for the given raster. `min` is the bottom-left corner.
    pub fn bounds(&self, resolution: Resolution) -> Range {
        let aspect = resolution.aspect();
        let min_re = BASE_MIN_RE / self.zoom + self.offset_x;
        let max_re = BASE_MAX_RE / self.zoom + self.offset_x;
        let min_im = -BASE_IM_EXTENT / self.zoom * aspect + self.offset_y;
        let max_im = BASE_IM_EXTENT / self.zoom * aspect + self.offset_y;

        Range::new(Point::new(min_re, min_im), Point::new(max_re, max_im))
    }

    /// Plane distance between neighbouring pixel centers: `(re_factor, im_factor)`.
    pub fn steps(&self, resolution: Resolution) -> (f64, f64) {
        let bounds = self.bounds(resolution);
        (
            (bounds.max_re() - bounds.min_re()) / (resolution.width() - 1) as f64,
            (bounds.max_im() - bounds.min_im()) / (resolution.height() - 1) as f64,
        )
    }

    /// Row 0 is the top of the plane: imaginary part decreases as `y` grows.
    pub fn pixel_to_plane(&self, resolution: Resolution, x: f64, y: f64) -> Complex {
        let bounds = self.bounds(resolution);
        let (re_factor, im_factor) = self.steps(resolution);
        Complex::new(bounds.min_re() + x * re_factor, bounds.max_im() - y * im_factor)
    }

    /// Inverse of [`Viewport::pixel_to_plane`], in fractional pixel units.
    pub fn plane_to_pixel(&self, resolution: Resolution, c: Complex) -> (f64, f64) {
        let bounds = self.bounds(resolution);
        let (re_factor, im_factor) = self.steps(resolution);
        (
            (c.re - bounds.min_re()) / re_factor,
            (bounds.max_im() - c.im) / im_factor,
        )
    }

    /// Multiplies the zoom by `factor` while keeping the plane point under
    /// pixel `(x, y)` fixed on screen.
    pub fn zoom_at(
        &self,
        resolution: Resolution,
        x: f64,
        y: f64,
        factor: f64,
    ) -> RenderResult<Self> {
        let anchor = self.pixel_to_plane(resolution, x, y);
        let zoomed = Viewport::new(self.zoom * factor, 0.0, 0.0)?;
        let shift = anchor - zoomed.pixel_to_plane(resolution, x, y);

        Viewport::new(zoomed.zoom, shift.re, shift.im)
    }

    /// Drags the plane by `(dx, dy)` pixels so the content follows the cursor.
    pub fn pan(&self, resolution: Resolution, dx: f64, dy: f64) -> RenderResult<Self> {
        let (re_factor, im_factor) = self.steps(resolution);
        Viewport::new(
            self.zoom,
            self.offset_x - dx * re_factor,
            self.offset_y + dy * im_factor,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn hd() -> Resolution {
        Resolution::new(1280, 720).unwrap()
    }

    #[test]
    fn rejects_non_positive_zoom() {
        assert!(Viewport::new(0.0, 0.0, 0.0).is_err());
        assert!(Viewport::new(-2.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Viewport::new(f64::INFINITY, 0.0, 0.0).is_err());
        assert!(Viewport::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Viewport::new(1.0, f64::NAN, 0.0).is_err());
        assert!(Viewport::new(1.0, 0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn unit_zoom_bounds_match_base_extents() {
        let bounds = Viewport::default().bounds(hd());
        assert_eq!(bounds.min_re(), -2.0);
        assert_eq!(bounds.max_re(), 1.0);
        assert_eq!(bounds.max_im(), 1.5 * 0.5625);
        assert_eq!(bounds.min_im(), -1.5 * 0.5625);
    }

    #[test]
    fn offsets_translate_bounds() {
        let bounds = Viewport::new(1.0, -0.5, 0.25).unwrap().bounds(hd());
        assert!((bounds.min_re() + 2.5).abs() < EPSILON);
        assert!((bounds.max_re() - 0.5).abs() < EPSILON);
        assert!((bounds.max_im() - (0.84375 + 0.25)).abs() < EPSILON);
    }

    #[test]
    fn extents_shrink_as_one_over_zoom() {
        let resolution = hd();
        let base = Viewport::new(1.0, 0.3, -0.1).unwrap().bounds(resolution);
        let mut previous = base;
        for zoom in [2.0, 4.0, 10.0, 1000.0] {
            let bounds = Viewport::new(zoom, 0.3, -0.1).unwrap().bounds(resolution);
            assert!(bounds.width() < previous.width());
            assert!(bounds.height() < previous.height());
            assert!((bounds.width() - base.width() / zoom).abs() < EPSILON);
            assert!((bounds.height() - base.height() / zoom).abs() < EPSILON);
            assert!(bounds.max_re() > bounds.min_re());
            assert!(bounds.max_im() > bounds.min_im());
            previous = bounds;
        }
    }

    #[test]
    fn top_left_pixel_maps_to_min_re_max_im() {
        let viewport = Viewport::default();
        let c = viewport.pixel_to_plane(hd(), 0.0, 0.0);
        assert_eq!(c, Complex::new(-2.0, 0.84375));
    }

    #[test]
    fn bottom_right_pixel_maps_to_max_re_min_im() {
        let resolution = hd();
        let viewport = Viewport::default();
        let c = viewport.pixel_to_plane(resolution, 1279.0, 719.0);
        assert!((c.re - 1.0).abs() < EPSILON);
        assert!((c.im + 0.84375).abs() < EPSILON);
    }

    #[test]
    fn plane_to_pixel_inverts_pixel_to_plane() {
        let resolution = hd();
        let viewport = Viewport::new(3.0, -0.7, 0.2).unwrap();
        let c = viewport.pixel_to_plane(resolution, 311.0, 97.0);
        let (x, y) = viewport.plane_to_pixel(resolution, c);
        assert!((x - 311.0).abs() < 1e-6);
        assert!((y - 97.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_at_keeps_the_anchor_under_the_cursor() {
        let resolution = hd();
        let viewport = Viewport::new(1.0, -0.5, 0.0).unwrap();
        let before = viewport.pixel_to_plane(resolution, 900.0, 200.0);

        let zoomed = viewport.zoom_at(resolution, 900.0, 200.0, 1.1).unwrap();
        let after = zoomed.pixel_to_plane(resolution, 900.0, 200.0);

        assert!((zoomed.zoom - 1.1).abs() < EPSILON);
        assert!((before.re - after.re).abs() < 1e-9);
        assert!((before.im - after.im).abs() < 1e-9);
    }

    #[test]
    fn zoom_at_rejects_collapsing_zoom() {
        let viewport = Viewport::default();
        assert!(viewport.zoom_at(hd(), 10.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn pan_moves_content_with_the_drag() {
        let resolution = hd();
        let viewport = Viewport::default();
        let (re_factor, im_factor) = viewport.steps(resolution);

        let panned = viewport.pan(resolution, 10.0, -4.0).unwrap();
        assert!((panned.offset_x + 10.0 * re_factor).abs() < EPSILON);
        assert!((panned.offset_y + 4.0 * im_factor).abs() < EPSILON);

        // What was under pixel (0, 0) is now under pixel (10, -4).
        let before = viewport.pixel_to_plane(resolution, 0.0, 0.0);
        let after = panned.pixel_to_plane(resolution, 10.0, -4.0);
        assert!((before.re - after.re).abs() < 1e-9);
        assert!((before.im - after.im).abs() < 1e-9);
    }
}
