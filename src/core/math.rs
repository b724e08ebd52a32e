use crate::Float;

/// An extension trait for floating point numbers.
///
/// The trait pre-computes the rounding factor for equality comparisons, which
/// depends on the floating point representation, and adds the decimal rounding
/// used when reporting contrast ratios.
pub(crate) trait FloatExt: Sized {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;

    /// Round to two digits after the decimal. Infinities and not-a-numbers
    /// pass through unchanged.
    fn round_to_hundredths(self) -> Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    #[inline]
    fn round_to_hundredths(self) -> f64 {
        if self.is_finite() {
            (self * 100.0).round() / 100.0
        } else {
            self
        }
    }
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;

    #[inline]
    fn round_to_hundredths(self) -> f32 {
        if self.is_finite() {
            (self * 100.0).round() / 100.0
        } else {
            self
        }
    }
}

#[cfg(test)]
mod test {
    use super::FloatExt;
    use crate::Float;

    #[test]
    fn test_round_to_hundredths() {
        assert_eq!((2.229_357 as Float).round_to_hundredths(), 2.23);
        assert_eq!((1.0 as Float).round_to_hundredths(), 1.0);
        assert_eq!((0.004 as Float).round_to_hundredths(), 0.0);
        assert!(Float::INFINITY.round_to_hundredths().is_infinite());
        assert!(Float::NAN.round_to_hundredths().is_nan());
    }
}
