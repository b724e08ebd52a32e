#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    hlc_to_lab, lab_to_xyz, parse_hex, rgb_to_hex, to_24bit, to_contrast_ratio,
    to_legacy_luminance, to_wcag_contrast_ratio, to_wcag_luminance, xyz_to_rgb, WhitePoint, D65,
};
use crate::error::ColorFormatError;
use crate::Float;

/// A color in the cylindrical Hue-Lightness-Chroma form of CIELAB.
///
/// The hue h is an angle in radians, the lightness l ranges `0..=100`, and
/// the chroma c is the non-negative distance from the neutral axis. Like
/// every other color type in this crate, it is an immutable value. Editing a
/// color means creating a new one, e.g., with [`HlcColor::with_lightness`].
///
/// ```
/// # use hlcgamut::HlcColor;
/// let black = HlcColor::new(0.0, 0.0, 0.0);
/// assert_eq!(black.to_hex(), "#000000");
///
/// let impossible = HlcColor::new(0.0, 100.0, 100.0);
/// assert_eq!(impossible.to_hex(), "");
/// assert!(!impossible.is_in_gamut());
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(frozen, get_all, module = "hlcgamut")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HlcColor {
    pub h: Float,
    pub l: Float,
    pub c: Float,
}

impl HlcColor {
    /// Create a new HLC color from hue in radians, lightness, and chroma.
    #[inline]
    pub const fn new(h: Float, l: Float, c: Float) -> Self {
        Self { h, l, c }
    }

    /// Get the coordinates in lightness, chroma, hue order.
    #[inline]
    pub const fn coordinates(&self) -> [Float; 3] {
        [self.l, self.c, self.h]
    }

    /// Create a copy with the given hue.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_hue(&self, h: Float) -> Self {
        Self::new(h, self.l, self.c)
    }

    /// Create a copy with the given lightness.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_lightness(&self, l: Float) -> Self {
        Self::new(self.h, l, self.c)
    }

    /// Create a copy with the given chroma.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_chroma(&self, c: Float) -> Self {
        Self::new(self.h, self.l, c)
    }

    /// Convert to cartesian CIELAB.
    pub fn to_lab(&self) -> LabColor {
        let [l, a, b] = hlc_to_lab(&self.coordinates());
        LabColor { l, a, b }
    }

    /// Convert to gamma-corrected sRGB, relative to D65.
    pub fn to_rgb(&self) -> RgbColor {
        self.to_lab().to_xyz(&D65).to_rgb()
    }

    /// Convert to a `#RRGGBB` hex string, which is empty if the color is out
    /// of the sRGB gamut.
    pub fn to_hex(&self) -> String {
        hlc_to_hex(self)
    }

    /// Determine whether the color is within the sRGB gamut.
    pub fn is_in_gamut(&self) -> bool {
        self.to_rgb().is_in_gamut()
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl HlcColor {
    /// Create a new HLC color. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(h: Float, l: Float, c: Float) -> Self {
        Self::new(h, l, c)
    }

    /// Convert to a hex string. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_hex")]
    pub fn py_to_hex(&self) -> String {
        self.to_hex()
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("HlcColor(h={}, l={}, c={})", self.h, self.l, self.c)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in cartesian CIELAB.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabColor {
    pub l: Float,
    pub a: Float,
    pub b: Float,
}

impl LabColor {
    /// Convert to CIE XYZ relative to the given white point.
    pub fn to_xyz(&self, white: &WhitePoint) -> XyzColor {
        let [x, y, z] = lab_to_xyz(&[self.l, self.a, self.b], white);
        XyzColor { x, y, z }
    }
}

/// A color in CIE XYZ, with Y in `0..=100` for in-gamut colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XyzColor {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl XyzColor {
    /// Convert to gamma-corrected sRGB.
    pub fn to_rgb(&self) -> RgbColor {
        let [r, g, b] = xyz_to_rgb(&[self.x, self.y, self.z]);
        RgbColor { r, g, b }
    }
}

/// A gamma-corrected sRGB color.
///
/// Each channel is `None` if it falls outside the unit range, i.e., is out of
/// gamut. A color with any `None` channel does not have a hex representation.
#[cfg_attr(
    feature = "pyffi",
    pyclass(frozen, get_all, module = "hlcgamut")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbColor {
    pub r: Option<Float>,
    pub g: Option<Float>,
    pub b: Option<Float>,
}

impl RgbColor {
    /// Determine whether all channels are in gamut.
    pub fn is_in_gamut(&self) -> bool {
        self.r.is_some() && self.g.is_some() && self.b.is_some()
    }

    /// Convert to 24-bit representation, unless out of gamut.
    pub fn to_24bit(&self) -> Option<[u8; 3]> {
        to_24bit(&[self.r, self.g, self.b])
    }

    /// Convert to a `#RRGGBB` hex string, which is empty if the color is out
    /// of gamut.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(&[self.r, self.g, self.b])
    }
}

impl core::str::FromStr for RgbColor {
    type Err = ColorFormatError;

    /// Parse a `#RRGGBB` hex color. Parsed colors are always in gamut.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b] = parse_hex(s)?;
        let scale = |value: u8| Some(value as Float / 255.0);
        Ok(Self {
            r: scale(r),
            g: scale(g),
            b: scale(b),
        })
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the HLC color to a `#RRGGBB` hex string.
///
/// The conversion goes through CIELAB, CIE XYZ relative to [`D65`], and
/// gamma-corrected sRGB. If the color is outside the sRGB gamut, the result
/// is the empty string. Callers use emptiness as the gamut test.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hlc_to_hex(color: &HlcColor) -> String {
    crate::core::hlc_to_hex(&color.coordinates(), &D65)
}

/// The channel transfer used for computing relative luminance.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "hlcgamut")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContrastFormula {
    /// The palette editor's historical formula, which applies the sRGB
    /// transfer to unnormalized `0..=255` channels and uses exclusive-or
    /// instead of exponentiation. Contrast labels have always been computed
    /// this way.
    #[default]
    Legacy,
    /// The WCAG 2.x relative luminance and contrast ratio, with the usual
    /// 0.05 flare term.
    Wcag,
}

/// Compute the contrast ratio between two `#RRGGBB` colors with the
/// [legacy formula](ContrastFormula::Legacy).
///
/// The result is symmetric in its arguments, rounded to two digits after the
/// decimal, and 1 for identical colors. It is not-a-number if either string
/// does not parse as a hex color.
///
/// ```
/// # use hlcgamut::contrast_ratio;
/// assert_eq!(contrast_ratio("#FFFFFF", "#767676"), 2.23);
/// assert_eq!(contrast_ratio("#767676", "#FFFFFF"), 2.23);
/// assert!(contrast_ratio("#FFFFFF", "").is_nan());
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_ratio(hex1: &str, hex2: &str) -> Float {
    contrast_ratio_with(hex1, hex2, ContrastFormula::Legacy)
}

/// Compute the contrast ratio between two `#RRGGBB` colors with the given
/// formula.
///
/// ```
/// # use hlcgamut::{contrast_ratio_with, ContrastFormula};
/// assert_eq!(contrast_ratio_with("#FFFFFF", "#000000", ContrastFormula::Wcag), 21.0);
/// ```
pub fn contrast_ratio_with(hex1: &str, hex2: &str, formula: ContrastFormula) -> Float {
    try_contrast_ratio(hex1, hex2, formula).unwrap_or_else(|error| {
        log::debug!("no contrast between {:?} and {:?}: {}", hex1, hex2, error);
        Float::NAN
    })
}

/// Compute the contrast ratio, reporting malformed hex colors as errors.
pub fn try_contrast_ratio(
    hex1: &str,
    hex2: &str,
    formula: ContrastFormula,
) -> Result<Float, ColorFormatError> {
    let rgb1 = parse_hex(hex1)?;
    let rgb2 = parse_hex(hex2)?;

    Ok(match formula {
        ContrastFormula::Legacy => {
            to_contrast_ratio(to_legacy_luminance(&rgb1), to_legacy_luminance(&rgb2))
        }
        ContrastFormula::Wcag => {
            to_wcag_contrast_ratio(to_wcag_luminance(&rgb1), to_wcag_luminance(&rgb2))
        }
    })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use crate::assert_close_enough;
    use super::{
        contrast_ratio, contrast_ratio_with, try_contrast_ratio, ContrastFormula, HlcColor, RgbColor,
    };
    use crate::error::ColorFormatError;
    use crate::D65;

    #[test]
    fn test_conversion_chain() {
        let color = HlcColor::new(0.0, 80.0, 20.0);

        let lab = color.to_lab();
        assert_close_enough!(lab.l, 80.0);
        assert_close_enough!(lab.a, 20.0);
        assert_close_enough!(lab.b, 0.0);

        let rgb = lab.to_xyz(&D65).to_rgb();
        assert!(rgb.is_in_gamut());
        assert_eq!(rgb.to_24bit(), Some([0xeb, 0xb9, 0xc7]));
        assert_eq!(rgb.to_hex(), "#EBB9C7");
        assert_eq!(color.to_hex(), "#EBB9C7");
    }

    #[test]
    fn test_gamut() {
        assert_eq!(HlcColor::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert!(HlcColor::new(0.0, 50.0, 0.0).is_in_gamut());

        let hot = HlcColor::new(0.0, 100.0, 100.0);
        assert!(!hot.is_in_gamut());
        assert_eq!(hot.to_hex(), "");
        assert_eq!(hot.to_rgb().to_24bit(), None);

        // Lowering the lightness does not rescue that much chroma.
        assert_eq!(hot.with_lightness(10.0).to_hex(), "");
        assert_eq!(hot.with_chroma(0.0).with_lightness(50.0).to_hex(), "#767676");
    }

    #[test]
    fn test_contrast() {
        let samples = ["#000000", "#FFFFFF", "#767676", "#EBB9C7", "#3178ea"];

        for a in samples {
            assert_eq!(contrast_ratio(a, a), 1.0, "{} against itself", a);
            assert_eq!(
                contrast_ratio_with(a, a, ContrastFormula::Wcag),
                1.0,
                "{} against itself",
                a
            );

            for b in samples {
                assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a), "{} vs {}", a, b);
                assert_eq!(
                    contrast_ratio_with(a, b, ContrastFormula::Wcag),
                    contrast_ratio_with(b, a, ContrastFormula::Wcag),
                    "{} vs {}",
                    a,
                    b
                );
            }
        }

        assert_eq!(contrast_ratio("#ffffff", "#767676"), 2.23);
        assert_eq!(contrast_ratio_with("#FFFFFF", "#767676", ContrastFormula::Wcag), 4.54);
    }

    #[test]
    fn test_malformed_contrast() {
        assert!(contrast_ratio("#FFF", "#000000").is_nan());
        assert!(contrast_ratio("#000000", "").is_nan());
        assert_eq!(
            try_contrast_ratio("#00000g", "#000000", ContrastFormula::Legacy),
            Err(ColorFormatError::MalformedHex)
        );
    }

    #[test]
    fn test_parse_rgb() -> Result<(), ColorFormatError> {
        let rgb: RgbColor = "#EBB9C7".parse()?;
        assert!(rgb.is_in_gamut());
        assert_close_enough!(rgb.r.unwrap_or_default(), 235.0 / 255.0);
        assert_close_enough!(rgb.b.unwrap_or_default(), 199.0 / 255.0);

        let white: RgbColor = "ffffff".parse()?;
        assert_eq!(white.to_hex(), "#FFFFFF");

        assert_eq!(
            "#12345".parse::<RgbColor>(),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        Ok(())
    }
}
