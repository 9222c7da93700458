#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{cmyk_to_rgb, format_cmyk, parse_hashed, rgb_to_cmyk};
use crate::error::ColorFormatError;
use crate::{ColorModel, Float};

/// A 24-bit RGB color.
///
/// This is the canonical representation of colors: three channels for red,
/// green, and blue, each an unsigned byte. The hashed hexadecimal notation
/// `#rrggbb` is the external representation. It converts losslessly from and
/// to this type through [`FromStr`](std::str::FromStr) and
/// [`Display`](std::fmt::Display).
///
/// ```
/// # use colormix::Rgb;
/// # use colormix::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let color: Rgb = "#123456".parse()?;
/// assert_eq!(color, Rgb::new(0x12, 0x34, 0x56));
/// assert_eq!(color.to_string(), "#123456");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, sequence, module = "colormix")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

#[cfg(feature = "pyffi")]
#[pymethods]
impl Rgb {
    /// Create a new RGB color from its channels. <i class=python-only>Python
    /// only!</i>
    #[new]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse the hashed hexadecimal notation. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Access this color's channels. <i class=python-only>Python only!</i>
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this color to CMYK. <i class=python-only>Python only!</i>
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::from(*self)
    }

    /// Compute the distance to the other color in the given model.
    pub fn distance(&self, other: &Rgb, model: ColorModel) -> Float {
        model.distance(self, other)
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the channel at the given index. <i class=python-only>Python
    /// only!</i>
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid channel index",
            )),
        }
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

#[cfg(not(feature = "pyffi"))]
impl Rgb {
    /// Create a new RGB color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Compute the distance to the other color in the given model.
    ///
    /// This method is a convenience wrapper for
    /// [`ColorModel::distance`].
    pub fn distance(&self, other: &Rgb, model: ColorModel) -> Float {
        model.distance(self, other)
    }
}

impl Rgb {
    /// Black, which is the result of mixing nothing.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s).map(Self)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<Cmyk> for Rgb {
    /// Convert the CMYK color to RGB, rounding each channel.
    fn from(value: Cmyk) -> Self {
        Self(cmyk_to_rgb(&value.0))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================

/// A CMYK color.
///
/// The four components cyan, magenta, yellow, and key are percentages
/// `0..=100`. CMYK colors are derived from [`Rgb`] colors. Converting back
/// reproduces the original channels up to rounding. Black converts to exactly
/// `[0, 0, 0, 100]`, whereas any CMYK color with a key of 100% converts to
/// black.
///
/// The display shows all four percentages and respects the formatter's
/// precision, which defaults to 2:
///
/// ```
/// # use colormix::Cmyk;
/// # use colormix::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let red = Cmyk::from_hex("#ff0000")?;
/// assert_eq!(red.to_string(), "C: 0.00%, M: 100.00%, Y: 100.00%, K: 0.00%");
/// assert_eq!(format!("{:.0}", red), "C: 0%, M: 100%, Y: 100%, K: 0%");
/// assert_eq!(red.to_hex(), "#ff0000");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "colormix"))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cmyk([Float; 4]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Cmyk {
    /// Create a new CMYK color from its percentages.
    #[cfg_attr(feature = "pyffi", new)]
    pub const fn new(c: Float, m: Float, y: Float, k: Float) -> Self {
        Self([c, m, y, k])
    }

    /// Parse the hashed hexadecimal notation and convert to CMYK.
    ///
    /// # Errors
    ///
    /// This method fails if the string is not in `#rrggbb` notation.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        s.parse::<Rgb>().map(Self::from)
    }

    /// Convert to RGB and format in hashed hexadecimal notation.
    pub fn to_hex(&self) -> String {
        Rgb::from(*self).to_string()
    }

    /// Access this color's components.
    pub const fn components(&self) -> [Float; 4] {
        self.0
    }

    /// Convert this color to its percentages. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl AsRef<[Float; 4]> for Cmyk {
    fn as_ref(&self) -> &[Float; 4] {
        &self.0
    }
}

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        Self(rgb_to_cmyk(&value.0))
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_cmyk(&self.0, f)
    }
}

// ====================================================================================================================
