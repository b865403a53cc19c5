use crate::models::pixel::pixel_buffer::OPAQUE;

/// Maps an escape count onto `0..=255`: `floor(255 * n / max_iterations)`.
///
/// Orbits that never escape (`n == max_iterations`) are white, immediate
/// escapes are black.
#[inline]
pub fn grayscale(iterations: u32, max_iterations: u32) -> u8 {
    (255.0 * iterations as f64 / max_iterations as f64) as u8
}

pub fn gray_rgba(intensity: u8) -> [u8; 4] {
    [intensity, intensity, intensity, OPAQUE]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fractal::mandelbrot::MAX_ITERATIONS;

    #[test]
    fn interior_is_white() {
        assert_eq!(grayscale(MAX_ITERATIONS, MAX_ITERATIONS), 255);
    }

    #[test]
    fn immediate_escape_is_black() {
        assert_eq!(grayscale(0, MAX_ITERATIONS), 0);
    }

    #[test]
    fn intensity_is_floored() {
        // 255 * 3 / 1000 = 0.765
        assert_eq!(grayscale(3, MAX_ITERATIONS), 0);
        // 255 * 4 / 1000 = 1.02
        assert_eq!(grayscale(4, MAX_ITERATIONS), 1);
        // 255 * 999 / 1000 = 254.745
        assert_eq!(grayscale(999, MAX_ITERATIONS), 254);
    }

    #[test]
    fn intensity_never_decreases_with_iterations() {
        let mut previous = 0;
        for n in 0..=MAX_ITERATIONS {
            let intensity = grayscale(n, MAX_ITERATIONS);
            assert!(intensity >= previous);
            previous = intensity;
        }
    }

    #[test]
    fn rgba_is_opaque_gray() {
        assert_eq!(gray_rgba(17), [17, 17, 17, 255]);
    }
}
