//! # hlcgamut
//!
//! hlcgamut is the color engine behind a palette editor that works in the
//! cylindrical Hue-Lightness-Chroma form of CIELAB.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! hlcgamut's main abstractions are:
//!
//!   * [`HlcColor`] is an immutable **high-resolution color** with hue,
//!     lightness, and chroma coordinates. [`HlcColor::to_hex`] converts it to
//!     sRGB by way of CIELAB and CIE XYZ. Colors outside the sRGB gamut have
//!     the empty string as their hex representation.
//!   * [`contrast_ratio`] computes the **contrast between two hex colors**,
//!     with either the editor's historical formula or WCAG 2.x as selected by
//!     [`ContrastFormula`].
//!   * The [`gamut`] module **sweeps one channel** of a color across its
//!     range and records the intervals that fall outside the sRGB gamut.
//!   * The [`region`] module **groups those intervals** across adjacent
//!     columns and projects the groups into closed polygons.
//!   * The [`path`] module **renders polygons and curves** as smooth cubic
//!     Bézier SVG paths.
//!   * The [`chart`] and [`palette`] modules put everything together for
//!     **plotting channels** of a grid of colors.
//!
//! For example, this is how to hatch the out-of-gamut regions in a chart of
//! the lightness of two colors:
//!
//! ```
//! # use hlcgamut::HlcColor;
//! # use hlcgamut::chart::{Channel, Chart};
//! # use hlcgamut::gamut::SweepConfig;
//! # use hlcgamut::path::CurveStyle;
//! # use hlcgamut::region::RegionStyle;
//! let colors = [HlcColor::new(0.0, 80.0, 20.0), HlcColor::new(0.0, 10.0, 90.0)];
//! let paths = Chart::default().invalid_region_paths(
//!     &colors,
//!     Channel::Lightness,
//!     &SweepConfig::default(),
//!     &RegionStyle::default(),
//!     &CurveStyle::default(),
//! );
//! assert_eq!(paths.len(), 2);
//! assert!(paths[0].starts_with("M 0,150 C "));
//! ```
//!
//!
//! ## 2. Optional Features
//!
//! hlcgamut supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`parallel`** sweeps the columns of a chart in parallel with
//!     [rayon](https://crates.io/crates/rayon). The results are the same as
//!     for the sequential sweep. This feature is disabled by default.
//!   - **`pyffi`** controls hlcgamut's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! hlcgamut logs through the [log](https://crates.io/crates/log) facade but
//! never installs a logger itself.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod color;
pub mod gamut;
pub mod path;
pub mod region;
pub mod chart;
pub mod palette;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use color::{
    contrast_ratio, contrast_ratio_with, hlc_to_hex, try_contrast_ratio, ContrastFormula, HlcColor,
    LabColor, RgbColor, XyzColor,
};
pub use core::{WhitePoint, D65};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn hlcgamut(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_function(wrap_pyfunction!(hlc_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(contrast_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(path::py_svg_path, m)?)?;

    m.add_class::<HlcColor>()?;
    m.add_class::<RgbColor>()?;
    m.add_class::<ContrastFormula>()?;
    m.add_class::<gamut::Interval>()?;
    m.add_class::<path::Point>()?;
    m.add_class::<chart::Channel>()?;
    m.add_class::<palette::Palette>()?;

    Ok(())
}
