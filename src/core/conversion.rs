use super::string::{format_hex, pack};
use crate::Float;

/// A reference white in CIE XYZ, with Y scaled to 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhitePoint {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

/// The [D65](https://en.wikipedia.org/wiki/Illuminant_D65) standard
/// illuminant, which is also sRGB's white point.
pub const D65: WhitePoint = WhitePoint {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

// --------------------------------------------------------------------------------------------------------------------

/// Convert HLC coordinates `[l, c, h]` with the hue in radians to CIELAB
/// coordinates `[l, a, b]`. This is a one-hop, direct conversion.
#[inline]
pub(crate) fn hlc_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [l, c, h] = *value;
    [l, c * h.cos(), c * h.sin()]
}

const EPSILON: Float = 0.008856;
const KAPPA_SLOPE: Float = 7.787;
const OFFSET: Float = 16.0 / 116.0;

/// Convert CIELAB coordinates to XYZ coordinates relative to the given white
/// point. This is a one-hop, direct conversion.
pub(crate) fn lab_to_xyz(value: &[Float; 3], white: &WhitePoint) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let cube = value.powi(3);
        if cube > EPSILON {
            cube
        } else {
            (value - OFFSET) / KAPPA_SLOPE
        }
    }

    let [l, a, b] = *value;
    let y = (l + 16.0) / 116.0;
    let x = a / 500.0 + y;
    let z = y - b / 200.0;

    [
        convert(x) * white.x,
        convert(y) * white.y,
        convert(z) * white.z,
    ]
}

// https://en.wikipedia.org/wiki/SRGB#From_CIE_XYZ_to_sRGB

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2406, -1.5372, -0.4986 ],
    [ -0.9689,  1.8758,  0.0415 ],
    [  0.0557, -0.2040,  1.0570 ],
];

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
///
/// Products are summed left to right without fused multiply-add, so that
/// results at the gamut boundary do not shift by a rounding step.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;
    let [x, y, z] = *vector;

    [
        x * row1[0] + y * row1[1] + z * row1[2],
        x * row2[0] + y * row2[1] + z * row2[2],
        x * row3[0] + y * row3[1] + z * row3[2],
    ]
}

/// Convert XYZ coordinates (Y in `0..=100`) to gamma-corrected sRGB.
///
/// Coordinates outside the unit range after gamma correction are out of
/// gamut and replaced with `None`. No clipping takes place.
pub(crate) fn xyz_to_rgb(value: &[Float; 3]) -> [Option<Float>; 3] {
    #[inline]
    #[allow(clippy::suboptimal_flops)]
    fn convert(value: Float) -> Option<Float> {
        let linear = value / 100.0;
        let encoded = if linear > 0.0031308 {
            1.055 * linear.powf(1.0 / 2.4) - 0.055
        } else {
            linear * 12.92
        };

        (0.0..=1.0).contains(&encoded).then_some(encoded)
    }

    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, value);
    [convert(r), convert(g), convert(b)]
}

/// Convert gamma-corrected sRGB to a `#RRGGBB` hex string.
///
/// If any coordinate is out of gamut, this function returns the empty
/// string. Otherwise, it scales each coordinate by 255 and truncates the
/// result, i.e., it does not round.
pub(crate) fn rgb_to_hex(value: &[Option<Float>; 3]) -> String {
    to_24bit(value).map_or_else(String::new, |coordinates| format_hex(pack(coordinates)))
}

/// Convert in-gamut sRGB coordinates to 24-bit representation by scaling and
/// truncation.
pub(crate) fn to_24bit(value: &[Option<Float>; 3]) -> Option<[u8; 3]> {
    #[inline]
    fn convert(value: Float) -> u8 {
        // In-gamut coordinates are 0..=1, so the product fits into a byte.
        (value * 255.0).floor() as u8
    }

    let [r, g, b] = *value;
    Some([convert(r?), convert(g?), convert(b?)])
}

/// Convert HLC coordinates `[l, c, h]` all the way to a hex string, which is
/// empty for out-of-gamut colors.
pub(crate) fn hlc_to_hex(value: &[Float; 3], white: &WhitePoint) -> String {
    let lab = hlc_to_lab(value);
    let xyz = lab_to_xyz(&lab, white);
    let rgb = xyz_to_rgb(&xyz);
    rgb_to_hex(&rgb)
}

// ====================================================================================================================
