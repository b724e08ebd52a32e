//! Detection of out-of-gamut intervals along a one-dimensional sweep.
//!
//! A palette editor plots one channel of each color in a column, say
//! lightness, along the vertical axis. Some values of that channel produce
//! colors outside the sRGB gamut. This module finds them by sweeping the
//! channel across its normalized range in fixed steps and merging consecutive
//! out-of-gamut samples into [`Interval`]s.
//!
//! Intervals use *inverted* coordinates, i.e., `1 − position`, which matches
//! the chart's y axis growing downwards. Consequently, an interval's `start`
//! is numerically greater than or equal to its `end`.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{HlcColor, Float};

/// The default distance between sweep samples.
pub const SWEEP_RESOLUTION: Float = 0.01;

/// The maximum number of steps of a sweep. Finer resolutions are clamped to
/// this many steps.
pub const MAX_SWEEP_STEPS: usize = 100_000;

/// Configuration for sweeping a channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepConfig {
    /// The distance between consecutive sample positions. A resolution of
    /// 0.01 makes for 101 samples, including both 0 and 1.
    pub resolution: Float,
}

impl SweepConfig {
    /// Get the number of steps between the first and last sample.
    ///
    /// The result is at least 1 and at most [`MAX_SWEEP_STEPS`]. Resolutions
    /// that are not positive or not finite sweep with a single step.
    pub fn steps(&self) -> usize {
        let steps = (1.0 / self.resolution).round();
        if steps.is_finite() && 1.0 <= steps {
            steps.min(MAX_SWEEP_STEPS as Float) as usize
        } else {
            1
        }
    }

    /// Get the sample positions, from 0 to 1 inclusive.
    pub fn positions(&self) -> impl Iterator<Item = Float> {
        let steps = self.steps();
        (0..=steps).map(move |index| index as Float / steps as Float)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            resolution: SWEEP_RESOLUTION,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A maximal sub-range of the sweep with out-of-gamut colors.
///
/// Both bounds are in inverted coordinates, so `end <= start`. The interval
/// starts at the first invalid sample and ends at the first valid sample
/// thereafter or at the end of the sweep.
#[cfg_attr(feature = "pyffi", pyclass(frozen, get_all, module = "hlcgamut"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub start: Float,
    pub end: Float,
}

impl Interval {
    /// Create a new interval.
    pub const fn new(start: Float, end: Float) -> Self {
        Self { start, end }
    }

    /// Get the extent of this interval.
    #[inline]
    pub fn extent(&self) -> Float {
        self.start - self.end
    }

    /// Determine whether this interval shares at least one point with the
    /// other interval.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        self.end <= other.start && other.end <= self.start
    }

    /// Determine the fraction of this interval covered by the other interval.
    ///
    /// This method returns zero for disjoint intervals and for intervals
    /// without extent.
    pub fn overlap_amount(&self, other: &Interval) -> Float {
        let extent = self.extent();
        if !self.intersects(other) || extent == 0.0 {
            return 0.0;
        }

        let shared = self.start.min(other.start) - self.end.max(other.end);
        shared / extent
    }

    /// Score the overlap between this and the other interval.
    ///
    /// The score is the larger fraction of either interval covered by the
    /// other. It is symmetric and 1 when one interval contains the other.
    pub fn overlap_score(&self, other: &Interval) -> Float {
        self.overlap_amount(other).max(other.overlap_amount(self))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the out-of-gamut intervals for one base color.
///
/// This function sweeps the position from 0 to 1 in steps of the configured
/// resolution, creates a color for each position with `maker`, and classifies
/// the sample as invalid if that color is outside the sRGB gamut. Consecutive
/// invalid samples form one [`Interval`].
///
/// ```
/// # use hlcgamut::HlcColor;
/// # use hlcgamut::gamut::{find_invalid_intervals, SweepConfig};
/// let color = HlcColor::new(0.0, 10.0, 90.0);
/// let intervals = find_invalid_intervals(
///     &color,
///     |color, position| color.with_lightness(100.0 * position),
///     &SweepConfig::default(),
/// );
/// assert_eq!(intervals.len(), 1);
/// ```
pub fn find_invalid_intervals<F>(base: &HlcColor, maker: F, config: &SweepConfig) -> Vec<Interval>
where
    F: Fn(&HlcColor, Float) -> HlcColor,
{
    let mut intervals = Vec::new();
    let mut start = None;
    let mut last_position = 0.0;

    for position in config.positions() {
        last_position = position;

        if maker(base, position).is_in_gamut() {
            if let Some(first) = start.take() {
                intervals.push(Interval::new(1.0 - first, 1.0 - position));
            }
        } else if start.is_none() {
            start = Some(position);
        }
    }

    if let Some(first) = start {
        intervals.push(Interval::new(1.0 - first, 1.0 - last_position));
    }

    intervals
}

/// Find the out-of-gamut intervals for every column.
///
/// This function applies [`find_invalid_intervals`] to each base color and
/// returns the intervals in column order. Since columns are independent of
/// each other, the `parallel` feature spreads the sweep across threads. The
/// result is the same either way.
pub fn find_invalid_regions<F>(
    colors: &[HlcColor],
    maker: F,
    config: &SweepConfig,
) -> Vec<Vec<Interval>>
where
    F: Fn(&HlcColor, Float) -> HlcColor + Sync,
{
    #[cfg(feature = "parallel")]
    let columns: Vec<Vec<Interval>> = colors
        .par_iter()
        .map(|color| find_invalid_intervals(color, &maker, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let columns: Vec<Vec<Interval>> = colors
        .iter()
        .map(|color| find_invalid_intervals(color, &maker, config))
        .collect();

    log::debug!(
        "swept {} columns with {} steps each, found {} invalid intervals",
        columns.len(),
        config.steps(),
        columns.iter().map(Vec::len).sum::<usize>()
    );

    columns
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use crate::assert_close_enough;
    use super::{
        find_invalid_intervals, find_invalid_regions, Interval, SweepConfig, MAX_SWEEP_STEPS,
    };
    use crate::{Float, HlcColor};

    const VALID: HlcColor = HlcColor::new(0.0, 50.0, 0.0);
    const INVALID: HlcColor = HlcColor::new(0.0, 100.0, 100.0);

    fn lightness(color: &HlcColor, position: Float) -> HlcColor {
        color.with_lightness(100.0 * position)
    }

    #[test]
    fn test_sweep_config() {
        let config = SweepConfig::default();
        assert_eq!(config.steps(), 100);

        let positions: Vec<Float> = config.positions().collect();
        assert_eq!(positions.len(), 101);
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[20], 0.2);
        assert_eq!(positions[100], 1.0);

        assert_eq!(SweepConfig { resolution: 0.25 }.steps(), 4);
        assert_eq!(SweepConfig { resolution: 0.0 }.steps(), 1);
        assert_eq!(SweepConfig { resolution: -1.0 }.steps(), 1);
    }

    #[test]
    fn test_sweep_steps_clamped() {
        assert_eq!(SweepConfig { resolution: 1e-30 }.steps(), MAX_SWEEP_STEPS);
        assert_eq!(SweepConfig { resolution: Float::MIN_POSITIVE }.steps(), MAX_SWEEP_STEPS);
        assert_eq!(SweepConfig { resolution: 1e-5 }.steps(), MAX_SWEEP_STEPS);

        let config = SweepConfig { resolution: 1e-30 };
        assert_eq!(config.positions().count(), MAX_SWEEP_STEPS + 1);
        assert_eq!(config.positions().last(), Some(1.0));
    }

    #[test]
    fn test_overlap() {
        let a = Interval::new(0.8, 0.4);
        let b = Interval::new(0.6, 0.2);
        assert!(a.intersects(&b));
        assert_close_enough!(a.overlap_amount(&b), 0.5);
        assert_close_enough!(b.overlap_amount(&a), 0.5);
        assert_close_enough!(a.overlap_score(&b), 0.5);

        let inner = Interval::new(0.7, 0.6);
        assert_close_enough!(a.overlap_amount(&inner), 0.25);
        assert_close_enough!(inner.overlap_amount(&a), 1.0);
        assert_close_enough!(a.overlap_score(&inner), 1.0);

        // Touching or disjoint intervals have no overlap.
        let below = Interval::new(0.4, 0.1);
        assert_eq!(a.overlap_score(&below), 0.0);
        let far = Interval::new(0.2, 0.1);
        assert!(!a.intersects(&far));
        assert_eq!(a.overlap_score(&far), 0.0);

        // So does an interval without extent.
        let point = Interval::new(0.0, 0.0);
        assert_eq!(point.overlap_score(&Interval::new(0.1, 0.0)), 0.0);
    }

    #[test]
    fn test_engineered_interval() {
        // Exactly the samples in 0.2..=0.4 are out of gamut.
        let maker = |_: &HlcColor, position: Float| {
            if (0.2..=0.4).contains(&position) {
                INVALID
            } else {
                VALID
            }
        };

        let intervals = find_invalid_intervals(&VALID, maker, &SweepConfig::default());
        assert_eq!(intervals.len(), 1);

        let Interval { start, end } = intervals[0];
        assert!((start - 0.8).abs() <= 0.01, "start {}", start);
        assert!((end - 0.6).abs() <= 0.01, "end {}", end);
        assert!(end < start);
    }

    #[test]
    fn test_sweep_edges() {
        let config = SweepConfig::default();

        // Invalid through the end of the sweep
        let intervals = find_invalid_intervals(
            &VALID,
            |_, position| if 0.9 <= position { INVALID } else { VALID },
            &config,
        );
        assert_eq!(intervals, vec![Interval::new(1.0 - 0.9, 0.0)]);

        // Invalid throughout
        let intervals = find_invalid_intervals(&VALID, |_, _| INVALID, &config);
        assert_eq!(intervals, vec![Interval::new(1.0, 0.0)]);

        // Valid throughout
        let intervals = find_invalid_intervals(&VALID, |_, _| VALID, &config);
        assert!(intervals.is_empty());

        // Two separate intervals
        let intervals = find_invalid_intervals(
            &VALID,
            |_, position| {
                if position <= 0.1 || 0.5 <= position && position <= 0.6 {
                    INVALID
                } else {
                    VALID
                }
            },
            &config,
        );
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].start, 1.0);
        assert!(intervals[1].start < intervals[0].end);
    }

    #[test]
    fn test_lightness_sweep() {
        let config = SweepConfig::default();

        // Light pink runs out of gamut at both ends of the lightness range.
        let pink = find_invalid_intervals(&HlcColor::new(0.0, 80.0, 20.0), lightness, &config);
        assert_eq!(pink.len(), 2);
        assert_close_enough!(pink[0].start, 1.0);
        assert_close_enough!(pink[0].end, 0.95);
        assert_close_enough!(pink[1].start, 0.13);
        assert_close_enough!(pink[1].end, 0.0);

        // A low-lightness, high-chroma red never fits.
        let red = find_invalid_intervals(&HlcColor::new(0.0, 10.0, 90.0), lightness, &config);
        assert_eq!(red, vec![Interval::new(1.0, 0.0)]);
    }

    #[test]
    fn test_columns() {
        let config = SweepConfig::default();
        assert!(find_invalid_regions(&[], lightness, &config).is_empty());

        let colors = [HlcColor::new(0.0, 80.0, 20.0), HlcColor::new(0.0, 10.0, 90.0)];
        let columns = find_invalid_regions(&colors, lightness, &config);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].len(), 2);
        assert_eq!(columns[1].len(), 1);
    }
}
