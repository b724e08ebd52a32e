mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{
    to_contrast_ratio, to_legacy_luminance, to_wcag_contrast_ratio, to_wcag_luminance,
};

// conversion
pub use conversion::{WhitePoint, D65};
pub(crate) use conversion::{hlc_to_hex, hlc_to_lab, lab_to_xyz, rgb_to_hex, to_24bit, xyz_to_rgb};

// equality
#[cfg(test)]
pub(crate) use equality::assert_near_point;
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::parse_hex;
