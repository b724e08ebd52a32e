//! A palette as a grid of colors.
//!
//! A [`Palette`] holds columns of [`HlcColor`]s. In the editor's default
//! palette, each column is one shade and each row is one hue. Charts plot
//! either a column or a row, which is why palettes support transposition.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::OutOfBoundsError;
use crate::{contrast_ratio, Float, HlcColor};

/// The number of columns in the default palette.
pub const DEFAULT_COLUMNS: usize = 10;

/// The number of rows in the default palette.
pub const DEFAULT_ROWS: usize = 9;

/// The labels for the default palette's columns.
pub const SHADE_LABELS: [u16; DEFAULT_COLUMNS] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// The labels for the default palette's rows.
pub const HUE_LABELS: [&str; DEFAULT_ROWS] = [
    "Gray", "Blue", "Cyan", "Green", "Yellow", "Orange", "Red", "Purple", "Violet",
];

/// A grid of colors, stored column by column.
///
/// Palettes are values. Updating a color with [`Palette::with_color`]
/// produces a new palette and leaves the original as is.
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "hlcgamut"))]
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    columns: Vec<Vec<HlcColor>>,
}

impl Palette {
    /// Create a new palette from its columns.
    pub fn new(columns: Vec<Vec<HlcColor>>) -> Self {
        Self { columns }
    }

    /// Get the columns.
    pub fn columns(&self) -> &[Vec<HlcColor>] {
        &self.columns
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows, i.e., the length of the shortest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Vec::len).min().unwrap_or(0)
    }

    fn check(&self, column: usize, row: usize) -> Result<(), OutOfBoundsError> {
        if self.column_count() <= column {
            Err(OutOfBoundsError::new(column, 0..self.column_count()))
        } else if self.row_count() <= row {
            Err(OutOfBoundsError::new(row, 0..self.row_count()))
        } else {
            Ok(())
        }
    }

    /// Get the color at the given column and row.
    pub fn get(&self, column: usize, row: usize) -> Result<HlcColor, OutOfBoundsError> {
        self.check(column, row)?;
        Ok(self.columns[column][row])
    }

    /// Get the colors of the given column.
    pub fn column(&self, column: usize) -> Result<&[HlcColor], OutOfBoundsError> {
        self.columns
            .get(column)
            .map(Vec::as_slice)
            .ok_or_else(|| OutOfBoundsError::new(column, 0..self.column_count()))
    }

    /// Get the colors of the given row.
    pub fn row(&self, row: usize) -> Result<Vec<HlcColor>, OutOfBoundsError> {
        if self.row_count() <= row {
            return Err(OutOfBoundsError::new(row, 0..self.row_count()));
        }

        Ok(self.columns.iter().map(|column| column[row]).collect())
    }

    /// Transpose this palette, turning rows into columns.
    #[must_use = "method returns a new palette and does not mutate original value"]
    pub fn transpose(&self) -> Self {
        let rows = (0..self.row_count())
            .map(|row| self.columns.iter().map(|column| column[row]).collect())
            .collect();
        Self::new(rows)
    }

    /// Create a copy of this palette with the color at the given column and
    /// row replaced.
    pub fn with_color(
        &self,
        column: usize,
        row: usize,
        color: HlcColor,
    ) -> Result<Self, OutOfBoundsError> {
        self.check(column, row)?;

        let mut columns = self.columns.clone();
        columns[column][row] = color;
        Ok(Self::new(columns))
    }

    /// Get the hex colors for display.
    ///
    /// Out-of-gamut colors are displayed as black.
    pub fn swatches(&self) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .map(|column| column.iter().map(swatch).collect())
            .collect()
    }

    /// Compute the contrast of every color against the selected color.
    ///
    /// The selected color itself is compared against white instead. All
    /// ratios use the legacy formula.
    pub fn contrast_grid(&self, column: usize, row: usize) -> Result<Vec<Vec<Float>>, OutOfBoundsError> {
        let selected = swatch(&self.get(column, row)?);

        let grid = self
            .swatches()
            .iter()
            .enumerate()
            .map(|(c, swatches)| {
                swatches
                    .iter()
                    .enumerate()
                    .map(|(r, hex)| {
                        if c == column && r == row {
                            contrast_ratio("#FFFFFF", hex)
                        } else {
                            contrast_ratio(hex, &selected)
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(grid)
    }
}

fn swatch(color: &HlcColor) -> String {
    let hex = color.to_hex();
    if hex.is_empty() {
        "#000000".to_string()
    } else {
        hex
    }
}

impl Default for Palette {
    /// Create the palette editor's seed palette.
    ///
    /// Its ten columns step from light to dark and its nine rows step around
    /// the hue circle. Small offsets keep every color distinct.
    #[allow(clippy::suboptimal_flops)]
    fn default() -> Self {
        let tau = 2.0 * core::f64::consts::PI as Float;

        let columns = (0..DEFAULT_COLUMNS)
            .map(|i| {
                let i = i as Float;
                (0..DEFAULT_ROWS)
                    .map(|j| {
                        let j = j as Float;
                        HlcColor::new(
                            j / 10.0 * tau + i / 200.0,
                            80.0 - i * 3.0 + j / 200.0,
                            28.0 + i / 10.0 + j / 200.0,
                        )
                    })
                    .collect()
            })
            .collect();

        Self::new(columns)
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Palette {
    /// Create the default palette. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new() -> Self {
        Self::default()
    }

    /// Get the color at the given column and row. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "get")]
    pub fn py_get(&self, column: usize, row: usize) -> PyResult<HlcColor> {
        Ok(self.get(column, row)?)
    }

    /// Get the hex colors for display. <i class=python-only>Python only!</i>
    #[pyo3(name = "swatches")]
    pub fn py_swatches(&self) -> Vec<Vec<String>> {
        self.swatches()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use crate::assert_close_enough;
    use super::{Palette, DEFAULT_COLUMNS, DEFAULT_ROWS};
    use crate::error::OutOfBoundsError;
    use crate::{contrast_ratio, HlcColor};

    #[test]
    fn test_default() -> Result<(), OutOfBoundsError> {
        let palette = Palette::default();
        assert_eq!(palette.column_count(), DEFAULT_COLUMNS);
        assert_eq!(palette.row_count(), DEFAULT_ROWS);

        let first = palette.get(0, 0)?;
        assert_eq!(first, HlcColor::new(0.0, 80.0, 28.0));

        let last = palette.get(9, 8)?;
        assert_close_enough!(last.l, 53.04);
        assert_close_enough!(last.c, 28.94);

        let swatches = palette.swatches();
        assert_eq!(swatches[0][0], "#F8B3C7");
        assert_eq!(swatches[9][8], "#767BAD");
        assert!(swatches.iter().flatten().all(|hex| hex.len() == 7));
        Ok(())
    }

    #[test]
    fn test_bounds() {
        let palette = Palette::default();
        assert_eq!(palette.get(10, 0), Err(OutOfBoundsError::new(10, 0..10)));
        assert_eq!(palette.get(0, 9), Err(OutOfBoundsError::new(9, 0..9)));
        assert!(palette.column(10).is_err());
        assert!(palette.row(9).is_err());
        assert!(palette.contrast_grid(0, 9).is_err());

        let empty = Palette::new(vec![]);
        assert_eq!(empty.row_count(), 0);
        assert_eq!(empty.transpose(), empty);
    }

    #[test]
    fn test_transpose() -> Result<(), OutOfBoundsError> {
        let palette = Palette::default();
        let transposed = palette.transpose();
        assert_eq!(transposed.column_count(), DEFAULT_ROWS);
        assert_eq!(transposed.row_count(), DEFAULT_COLUMNS);
        assert_eq!(transposed.get(3, 7)?, palette.get(7, 3)?);
        assert_eq!(transposed.column(3)?, palette.row(3)?.as_slice());
        assert_eq!(transposed.transpose(), palette);
        Ok(())
    }

    #[test]
    fn test_with_color() -> Result<(), OutOfBoundsError> {
        let palette = Palette::default();
        let impossible = HlcColor::new(0.0, 100.0, 100.0);

        let updated = palette.with_color(2, 4, impossible)?;
        assert_eq!(updated.get(2, 4)?, impossible);
        assert_ne!(palette.get(2, 4)?, impossible);
        assert_eq!(updated.swatches()[2][4], "#000000");
        Ok(())
    }

    #[test]
    fn test_contrast_grid() -> Result<(), OutOfBoundsError> {
        let palette = Palette::default();
        let swatches = palette.swatches();
        let grid = palette.contrast_grid(0, 0)?;

        assert_eq!(grid.len(), DEFAULT_COLUMNS);
        assert_eq!(grid[0][0], contrast_ratio("#FFFFFF", &swatches[0][0]));
        assert_eq!(grid[1][0], contrast_ratio(&swatches[1][0], &swatches[0][0]));
        assert_eq!(grid[9][8], contrast_ratio(&swatches[9][8], &swatches[0][0]));
        assert!(grid.iter().flatten().all(|ratio| 1.0 <= *ratio));
        Ok(())
    }
}
