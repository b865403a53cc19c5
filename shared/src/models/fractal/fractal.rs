use complex_rs::complex::Complex;

use crate::models::escape::EscapeSample;

/// An escape-time fractal: iterates a recurrence from sample point `c` until
/// the orbit leaves the escape radius or `max_iterations` is reached.
pub trait Fractal {
    fn escape_time(&self, c: Complex, max_iterations: u32) -> EscapeSample;
}
