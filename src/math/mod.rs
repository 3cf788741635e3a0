//! Miscellaneous math functions for general use

/// Free functions and the [`Angle`](angular::Angle) type for handling and
/// converting between different representations of angles.
pub mod angular;

/// Round to a given number of decimals, half away from zero
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(59.999_999_999_96, 10), 60.0);
        assert_eq!(round_to(12.345_678_901_234, 8), 12.345_678_9);
        assert_eq!(round_to(-0.5, 0), -1.0);
    }
}
