//! Charts plotting one channel of a sequence of colors.
//!
//! The palette editor shows, for each row and column of the palette, one
//! chart per [`Channel`]. A chart plots the channel's value for every color
//! as a smooth curve and hatches the regions where changing the channel
//! would leave the sRGB gamut. [`Chart`] computes the geometry for both.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::gamut::SweepConfig;
use crate::path::{svg_path, CurveStyle, Point};
use crate::region::{invalid_regions, RegionStyle};
use crate::{Float, HlcColor};

/// An editable channel of [`HlcColor`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "hlcgamut")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Lightness,
    Chroma,
    Hue,
}

impl Channel {
    /// Get all channels in display order.
    pub const fn all() -> [Channel; 3] {
        [Self::Lightness, Self::Chroma, Self::Hue]
    }

    /// Get the channel's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Lightness => "Lightness",
            Self::Chroma => "Chroma",
            Self::Hue => "Hue",
        }
    }

    /// Get the channel's maximum value, which corresponds to normalized
    /// value 1.
    pub fn max(&self) -> Float {
        match *self {
            Self::Lightness | Self::Chroma => 100.0,
            Self::Hue => 2.0 * core::f64::consts::PI as Float,
        }
    }

    /// Get the maximum value shown to users. Hue is shown in degrees.
    pub const fn max_visible(&self) -> Float {
        match *self {
            Self::Lightness | Self::Chroma => 100.0,
            Self::Hue => 360.0,
        }
    }

    /// Get the channel's value for the color.
    pub const fn value(&self, color: &HlcColor) -> Float {
        match *self {
            Self::Lightness => color.l,
            Self::Chroma => color.c,
            Self::Hue => color.h,
        }
    }

    /// Get the channel's value for the color, normalized to `0..=1`.
    pub fn normalized(&self, color: &HlcColor) -> Float {
        self.value(color) / self.max()
    }

    /// Create a copy of the color with the channel set to the normalized
    /// value times the channel's maximum.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with(&self, color: &HlcColor, normalized: Float) -> HlcColor {
        let value = normalized * self.max();
        match *self {
            Self::Lightness => color.with_lightness(value),
            Self::Chroma => color.with_chroma(value),
            Self::Hue => color.with_hue(value),
        }
    }

    /// Format the channel's value for display, with one digit after the
    /// decimal.
    pub fn label(&self, color: &HlcColor) -> String {
        format!("{:.1}", self.value(color) * self.max_visible() / self.max())
    }

    /// Adjust the channel of the color to the normalized value.
    ///
    /// Unless `allow_out_of_gamut` is set, this method refuses adjustments
    /// that would leave the sRGB gamut by returning `None`.
    pub fn adjust(
        &self,
        color: &HlcColor,
        normalized: Float,
        allow_out_of_gamut: bool,
    ) -> Option<HlcColor> {
        let adjusted = self.with(color, normalized);
        if allow_out_of_gamut || adjusted.is_in_gamut() {
            Some(adjusted)
        } else {
            log::trace!("refusing to move {} of {:?} out of gamut", self.name(), color);
            None
        }
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Channel {
    /// Get the channel's name. <i class=python-only>Python only!</i>
    #[pyo3(name = "name")]
    pub fn py_name(&self) -> &'static str {
        self.name()
    }

    /// Format the channel's value for display. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "label")]
    pub fn py_label(&self, color: HlcColor) -> String {
        self.label(&color)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The default chart width.
pub const CHART_WIDTH: Float = 450.0;

/// The default chart height.
pub const CHART_HEIGHT: Float = 150.0;

/// The dimensions of a chart.
///
/// Colors are spaced evenly across the width, each in the center of its own
/// column. Channel values run top to bottom from maximum to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chart {
    pub width: Float,
    pub height: Float,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

impl Chart {
    /// Get the horizontal position of the column with the given, possibly
    /// fractional index, given the total number of columns.
    pub fn x_position(&self, index: Float, count: usize) -> Float {
        let spacing = self.width / count.max(1) as Float;
        index.mul_add(spacing, spacing / 2.0)
    }

    /// Get the vertical position of the inverted, normalized value.
    pub fn y_position(&self, inverted: Float) -> Float {
        inverted * self.height
    }

    /// Get the points plotting the channel for each color.
    pub fn curve_points(&self, colors: &[HlcColor], channel: Channel) -> Vec<Point> {
        colors
            .iter()
            .enumerate()
            .map(|(index, color)| {
                Point::new(
                    self.x_position(index as Float, colors.len()),
                    self.y_position(1.0 - channel.normalized(color)),
                )
            })
            .collect()
    }

    /// Render the channel's curve as an SVG path.
    pub fn curve_path(&self, colors: &[HlcColor], channel: Channel, style: &CurveStyle) -> String {
        svg_path(&self.curve_points(colors, channel), style)
    }

    /// Compute the outlines of the out-of-gamut regions for the channel.
    pub fn invalid_regions(
        &self,
        colors: &[HlcColor],
        channel: Channel,
        sweep: &SweepConfig,
        style: &RegionStyle,
    ) -> Vec<Vec<Point>> {
        let count = colors.len();
        invalid_regions(
            colors,
            |color, position| channel.with(color, position),
            sweep,
            style,
            |x| self.x_position(x, count),
            |y| self.y_position(y),
        )
    }

    /// Render the out-of-gamut regions for the channel as SVG paths.
    pub fn invalid_region_paths(
        &self,
        colors: &[HlcColor],
        channel: Channel,
        sweep: &SweepConfig,
        style: &RegionStyle,
        curve: &CurveStyle,
    ) -> Vec<String> {
        self.invalid_regions(colors, channel, sweep, style)
            .iter()
            .map(|outline| svg_path(outline, curve))
            .collect()
    }
}

// ====================================================================================================================
