use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::fractal::Fractal;
use crate::models::escape::EscapeSample;

/// Iteration cap of the reference renderer. Part of the bit-exact output.
pub const MAX_ITERATIONS: u32 = 1000;

/// `|Z|² > 4` is the escape test for radius 2.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// `Z ← Z² + c`, starting from `Z = c`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mandelbrot {}

impl Mandelbrot {
    pub fn new() -> Self {
        Self {}
    }
}

impl Fractal for Mandelbrot {
    fn escape_time(&self, c: Complex, max_iterations: u32) -> EscapeSample {
        let mut z = c;
        let mut n = 0;

        // A NaN magnitude never compares greater, so such orbits run to the cap.
        while n < max_iterations {
            if z.norm_sq() > ESCAPE_RADIUS_SQ {
                break;
            }
            z = z.square() + c;
            n += 1;
        }

        EscapeSample { z, iterations: n }
    }
}
