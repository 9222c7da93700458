use crate::{Bits, Float};

/// The factor determining rounding precision for equality comparisons.
///
/// A floating point number is multiplied by this factor and rounded before
/// comparison, which limits the number of significant digits after the
/// decimal. The factor depends on the floating point representation.
pub(crate) trait RoundingFactor {
    const ROUNDING_FACTOR: Self;
}

impl RoundingFactor for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
}

impl RoundingFactor for f32 {
    const ROUNDING_FACTOR: f32 = 1e3;
}

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

    f = (<Float as RoundingFactor>::ROUNDING_FACTOR * f).round();

    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}
