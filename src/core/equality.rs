#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::FloatExt;
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two points are within the given tolerance
/// of each other along both axes.
///
/// Unlike [`assert_close_enough`], this macro takes an explicit tolerance,
/// since sweep positions and region outlines are only accurate up to one
/// sweep step.
///
/// # Panics
///
/// This macro panics if either coordinate differs by more than the tolerance.
#[cfg(test)]
macro_rules! assert_near_point {
    ($p1:expr, $p2:expr, $tolerance:expr $(,)?) => {
        let (p1, p2, tolerance) = ($p1, $p2, $tolerance);
        assert!(
            (p1.x - p2.x).abs() <= tolerance && (p1.y - p2.y).abs() <= tolerance,
            "points differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            p1,
            p2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_near_point;

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Helper function to normalize a floating point number before equality
/// testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    let mut f = if f.is_nan() { 0.0 } else { f };

    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

#[cfg(test)]
mod test {
    use super::to_eq_bits;
    use crate::path::Point;

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(0.1 + 0.2), to_eq_bits(0.3));
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(crate::Float::NAN), to_eq_bits(0.0));
        assert_ne!(to_eq_bits(0.3), to_eq_bits(0.31));

        assert_close_enough!(0.7 - 0.21, 0.49);
    }

    #[test]
    fn test_near_point() {
        assert_near_point!(Point::new(0.96, 0.7), Point::new(0.96, 0.705), 0.01);
    }
}
