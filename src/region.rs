//! Grouping of invalid intervals into regions and their projection into
//! drawable outlines.
//!
//! The intervals found by [`gamut`](crate::gamut) are per column. Adjacent
//! columns usually have overlapping intervals that visually form one region
//! spanning several columns. [`group_intervals`] chains such intervals from
//! left to right, [`collect_regions`] gathers each group's intervals, and
//! [`project_regions`] turns every region into a closed polygon in pixel
//! space, ready for [`svg_path`](crate::path::svg_path).

use crate::gamut::{find_invalid_regions, Interval, SweepConfig};
use crate::path::Point;
use crate::{Float, HlcColor};

/// The default half-width of regions confined to a single column.
pub const WIDEN_HALF_WIDTH: Float = 0.04;

/// An interval together with the group it has been assigned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupedInterval {
    pub interval: Interval,
    pub group: Option<usize>,
}

impl From<Interval> for GroupedInterval {
    fn from(interval: Interval) -> Self {
        Self {
            interval,
            group: None,
        }
    }
}

/// Find the unassigned interval in `candidates` with the greatest overlap
/// score against `target`.
///
/// Only strictly positive scores count and the first of several equal
/// scores wins.
fn find_max_overlap(target: &Interval, candidates: &[GroupedInterval]) -> Option<usize> {
    let mut best = None;
    let mut best_score = 0.0;

    for (index, candidate) in candidates.iter().enumerate() {
        let score = target.overlap_score(&candidate.interval);
        if candidate.group.is_none() && score > best_score {
            best = Some(index);
            best_score = score;
        }
    }

    best
}

/// Group the intervals of all columns.
///
/// This function visits the columns left to right and, within each column,
/// the intervals top to bottom. Each interval without a group starts a new
/// group, which then greedily extends into the next column with the
/// unassigned interval that overlaps the most. The chain ends at the last
/// column or when no unassigned interval overlaps. Group identifiers are
/// consecutive, starting with zero.
///
/// The result is deterministic and every interval belongs to exactly one
/// group.
pub fn group_intervals(columns: Vec<Vec<Interval>>) -> Vec<Vec<GroupedInterval>> {
    let mut columns: Vec<Vec<GroupedInterval>> = columns
        .into_iter()
        .map(|column| column.into_iter().map(GroupedInterval::from).collect())
        .collect();

    let mut next_group = 0;
    for first_column in 0..columns.len() {
        for first_index in 0..columns[first_column].len() {
            if columns[first_column][first_index].group.is_some() {
                continue;
            }

            let group = next_group;
            next_group += 1;

            let (mut column, mut index) = (first_column, first_index);
            loop {
                columns[column][index].group = Some(group);
                if column + 1 >= columns.len() {
                    break;
                }

                let target = columns[column][index].interval;
                match find_max_overlap(&target, &columns[column + 1]) {
                    Some(next) => {
                        log::trace!(
                            "group {} continues from column {} into column {}",
                            group,
                            column,
                            column + 1
                        );
                        column += 1;
                        index = next;
                    }
                    None => break,
                }
            }
        }
    }

    log::debug!("grouped intervals into {} groups", next_group);
    columns
}

/// Count the groups among the grouped intervals.
pub fn group_count(columns: &[Vec<GroupedInterval>]) -> usize {
    columns
        .iter()
        .flatten()
        .filter_map(|grouped| grouped.group)
        .max()
        .map_or(0, |group| group + 1)
}

// --------------------------------------------------------------------------------------------------------------------

/// The padding added to regions touching the chart's outermost columns.
///
/// A region that touches a boundary column is extended by half a column, so
/// that it reaches the chart's edge instead of ending at the column's center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPadding {
    /// Pad regions in the first column only. The palette editor has always
    /// drawn regions this way.
    #[default]
    Leading,
    /// Pad regions in the first and the last column.
    Both,
}

/// The visual parameters for projecting regions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionStyle {
    /// The half-width of regions confined to one column.
    pub half_width: Float,
    /// The padding for regions touching the boundary columns.
    pub padding: BoundaryPadding,
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            half_width: WIDEN_HALF_WIDTH,
            padding: BoundaryPadding::default(),
        }
    }
}

/// One column's share of a region.
///
/// The column is a column index, or a synthetic position half a column
/// beyond the first or last column for boundary padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionSpan {
    pub column: Float,
    pub start: Float,
    pub end: Float,
}

/// The spans of one group, in column order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    pub spans: Vec<RegionSpan>,
}

impl Region {
    /// Trace the region's outline.
    ///
    /// The outline runs forward along the starts, backward along the ends,
    /// and closes with the first start again. It has `2n + 1` points for `n`
    /// spans and is empty for a region without spans.
    pub fn outline(&self) -> Vec<Point> {
        let Some(first) = self.spans.first() else {
            return Vec::new();
        };

        let mut points = Vec::with_capacity(2 * self.spans.len() + 1);
        points.extend(self.spans.iter().map(|s| Point::new(s.column, s.start)));
        points.extend(self.spans.iter().rev().map(|s| Point::new(s.column, s.end)));
        points.push(Point::new(first.column, first.start));
        points
    }
}

/// Collect the regions, one per group, in ascending group order.
pub fn collect_regions(columns: &[Vec<GroupedInterval>], padding: BoundaryPadding) -> Vec<Region> {
    let count = group_count(columns);
    let last_column = columns.len().saturating_sub(1);
    let mut regions = vec![Region::default(); count];

    for (column, intervals) in columns.iter().enumerate() {
        for grouped in intervals {
            let Some(group) = grouped.group else {
                continue;
            };

            let Interval { start, end } = grouped.interval;
            let span = |column: Float| RegionSpan { column, start, end };
            let spans = &mut regions[group].spans;

            if column == 0 {
                spans.push(span(-0.5));
            }
            spans.push(span(column as Float));
            if padding == BoundaryPadding::Both && column == last_column {
                spans.push(span(column as Float + 0.5));
            }
        }
    }

    regions
}

/// Widen a degenerate outline.
///
/// An outline with three points belongs to a single span and hence has zero
/// width. This function replaces such an outline with a closed rectangle of
/// the given half-width around the span's column. Other outlines are returned
/// as is.
pub fn widen(points: Vec<Point>, half_width: Float) -> Vec<Point> {
    if points.len() != 3 {
        return points;
    }

    let left = points[0].x - half_width;
    let right = points[0].x + half_width;
    let top = points[0].y;
    let bottom = points[1].y;

    vec![
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
        Point::new(left, top),
    ]
}

/// Project the grouped intervals into closed outlines in pixel space.
///
/// The outlines are computed in column and unit coordinates, widened if
/// degenerate, and then mapped to pixels by applying `x_conv` to column
/// positions and `y_conv` to inverted interval coordinates.
pub fn project_regions<X, Y>(
    columns: &[Vec<GroupedInterval>],
    style: &RegionStyle,
    x_conv: X,
    y_conv: Y,
) -> Vec<Vec<Point>>
where
    X: Fn(Float) -> Float,
    Y: Fn(Float) -> Float,
{
    let outlines: Vec<Vec<Point>> = collect_regions(columns, style.padding)
        .iter()
        .map(|region| {
            widen(region.outline(), style.half_width)
                .into_iter()
                .map(|point| Point::new(x_conv(point.x), y_conv(point.y)))
                .collect()
        })
        .collect();

    log::debug!("projected {} region outlines", outlines.len());
    outlines
}

/// Find, group, and project the invalid regions for the colors.
///
/// This function combines [`find_invalid_regions`], [`group_intervals`], and
/// [`project_regions`].
///
/// ```
/// # use hlcgamut::HlcColor;
/// # use hlcgamut::gamut::SweepConfig;
/// # use hlcgamut::region::{invalid_regions, RegionStyle};
/// let colors = [HlcColor::new(0.0, 80.0, 20.0), HlcColor::new(0.0, 10.0, 90.0)];
/// let outlines = invalid_regions(
///     &colors,
///     |color, position| color.with_lightness(100.0 * position),
///     &SweepConfig::default(),
///     &RegionStyle::default(),
///     |x| x,
///     |y| y,
/// );
/// assert_eq!(outlines.len(), 2);
/// ```
pub fn invalid_regions<F, X, Y>(
    colors: &[HlcColor],
    maker: F,
    sweep: &SweepConfig,
    style: &RegionStyle,
    x_conv: X,
    y_conv: Y,
) -> Vec<Vec<Point>>
where
    F: Fn(&HlcColor, Float) -> HlcColor + Sync,
    X: Fn(Float) -> Float,
    Y: Fn(Float) -> Float,
{
    let columns = find_invalid_regions(colors, maker, sweep);
    let grouped = group_intervals(columns);
    project_regions(&grouped, style, x_conv, y_conv)
}

// ====================================================================================================================
