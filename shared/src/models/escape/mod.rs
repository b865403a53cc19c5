use complex_rs::complex::Complex;

/// Outcome of iterating one sample point: the last `Z` reached and how many
/// steps were taken before escaping (or hitting the cap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeSample {
    pub z: Complex,
    pub iterations: u32,
}

