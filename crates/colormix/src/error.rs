//! Utility module with colormix's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// Colors are written in hashed hexadecimal notation, i.e., `#` followed by
/// exactly six hexadecimal digits. Each variant identifies one way a string
/// can fail to match that notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with an unexpected number of characters. For example,
    /// `#00` is missing four hexadecimal digits, whereas `#💩00` has the
    /// correct byte length but is not all ASCII.
    UnexpectedCharacters,

    /// A color format with a character that is not a hexadecimal digit. For
    /// example, `#00ff0g` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color format should have exactly 6 hexadecimal digits after `#`")
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

// ====================================================================================================================

/// An error while mixing colors or searching for a blend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A color string is not in hashed hexadecimal notation.
    InvalidFormat(ColorFormatError),

    /// The number of colors differs from the number of percentages. This is a
    /// contract violation by the caller; the optimizer never triggers it.
    ArityMismatch { colors: usize, percentages: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(error) => write!(f, "invalid color: {}", error),
            Self::ArityMismatch {
                colors,
                percentages,
            } => write!(
                f,
                "{} colors cannot be mixed with {} percentages",
                colors, percentages
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat(error) => Some(error),
            Self::ArityMismatch { .. } => None,
        }
    }
}

impl From<ColorFormatError> for Error {
    fn from(value: ColorFormatError) -> Self {
        Self::InvalidFormat(value)
    }
}

#[cfg(feature = "pyffi")]
impl From<Error> for PyErr {
    fn from(value: Error) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
