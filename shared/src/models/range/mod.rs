use super::point::Point;

use serde::{Deserialize, Serialize};

/// Axis aligned region of the complex plane: `x` is the real axis, `y` the imaginary one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn min_re(&self) -> f64 {
        self.min.x
    }

    pub fn max_re(&self) -> f64 {
        self.max.x
    }

    pub fn min_im(&self) -> f64 {
        self.min.y
    }

    pub fn max_im(&self) -> f64 {
        self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, other: &Range) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }
}
