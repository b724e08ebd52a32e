use super::FloatExt;
use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// Compute the relative luminance of the 24-bit color with the palette
/// editor's historical channel transfer.
///
/// That transfer feeds the raw `0..=255` channel into the piecewise formula
/// and, for the power branch, truncates the base and combines it with `2`
/// through bitwise exclusive-or instead of raising it to the power 2.4. The result is not a
/// physical luminance, but it is what the editor's contrast labels have always
/// shown.
pub(crate) fn to_legacy_luminance(coordinates: &[u8; 3]) -> Float {
    #[inline]
    fn convert(value: u8) -> Float {
        let value = Float::from(value);
        if value <= 0.03928 {
            value / 12.92
        } else {
            // Channels are at most 255, so the base fits into an i32.
            (((value + 0.055) / 1.055) as i32 ^ 2) as Float
        }
    }

    let [r, g, b] = *coordinates;
    weigh([convert(r), convert(g), convert(b)])
}

/// Compute the WCAG 2.x relative luminance of the 24-bit color.
pub(crate) fn to_wcag_luminance(coordinates: &[u8; 3]) -> Float {
    #[inline]
    fn convert(value: u8) -> Float {
        let value = Float::from(value) / 255.0;
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [r, g, b] = *coordinates;
    weigh([convert(r), convert(g), convert(b)])
}

#[inline]
fn weigh(linear: [Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = linear;
    c1.mul_add(r, c2.mul_add(g, c3 * b))
}

/// Compute the contrast ratio between two luminance values.
///
/// The result is the larger of the two quotients, each rounded to two digits
/// after the decimal. Equal luminances, including two zeros, have ratio 1. A
/// zero luminance against a positive one has infinite ratio.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    if luminance1.is_nan() || luminance2.is_nan() {
        return Float::NAN;
    } else if luminance1 == luminance2 {
        return 1.0;
    }

    let ratio1 = (luminance1 / luminance2).round_to_hundredths();
    let ratio2 = (luminance2 / luminance1).round_to_hundredths();
    ratio1.max(ratio2)
}

/// Compute the WCAG 2.x contrast ratio between two luminance values, rounded
/// to two digits after the decimal.
pub(crate) fn to_wcag_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    ((lighter + 0.05) / (darker + 0.05)).round_to_hundredths()
}

#[cfg(test)]
mod test {
    use crate::assert_close_enough;
    use super::{to_contrast_ratio, to_legacy_luminance, to_wcag_contrast_ratio, to_wcag_luminance};
    use crate::Float;

    #[test]
    fn test_legacy_luminance() {
        assert_close_enough!(to_legacy_luminance(&[0, 0, 0]), 0.0);
        // (255.055 / 1.055) truncates to 241, and 241 ^ 2 is 243.
        assert_close_enough!(to_legacy_luminance(&[255, 255, 255]), 243.0);
        // (118.055 / 1.055) truncates to 111, and 111 ^ 2 is 109.
        assert_close_enough!(to_legacy_luminance(&[0x76, 0x76, 0x76]), 109.0);
    }

    #[test]
    fn test_wcag_luminance() {
        assert_close_enough!(to_wcag_luminance(&[0, 0, 0]), 0.0);
        assert_close_enough!(to_wcag_luminance(&[255, 255, 255]), 1.0);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_eq!(to_contrast_ratio(243.0, 109.0), 2.23);
        assert_eq!(to_contrast_ratio(109.0, 243.0), 2.23);
        assert_eq!(to_contrast_ratio(0.0, 0.0), 1.0);
        assert_eq!(to_contrast_ratio(0.0, 243.0), Float::INFINITY);
        assert!(to_contrast_ratio(Float::NAN, 1.0).is_nan());

        assert_eq!(to_wcag_contrast_ratio(1.0, 0.0), 21.0);
        assert_eq!(to_wcag_contrast_ratio(0.0, 1.0), 21.0);
    }
}
