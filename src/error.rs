//! Utility module with hlcgamut's errors.
//!
//! Out-of-gamut colors are *not* errors. They are represented by the empty
//! hex string and flow through the pipeline as ordinary data. The errors here
//! only cover malformed caller input.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for a
/// [`Palette`](crate::palette::Palette), i.e., a column index beyond the
/// number of columns or a row index beyond the number of colors per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::Range<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: usize, expected: core::ops::Range<usize>) -> Self {
        Self { value, expected }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} should fit into range {}..{}",
            self.value, self.expected.start, self.expected.end
        )
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous hexadecimal color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing four hexadecimal digits,
    /// whereas `#💩00` has the correct length in bytes but contains an
    /// unsuitable character.
    UnexpectedCharacters,

    /// A color format with the right number of ASCII characters that are not
    /// all hexadecimal digits. For example, `#efg000` has a malformed red
    /// coordinate.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnexpectedCharacters => {
                f.write_str("color format should be `#` followed by six hexadecimal digits")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
