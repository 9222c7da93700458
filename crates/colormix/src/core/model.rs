#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::Error;
use crate::{Float, Rgb};

/// The enumeration of supported color models.
///
/// A color model determines how colors are blended and how far apart two
/// colors are. Both operations always use the same model, so that the
/// optimizer's notion of "close" matches the mixing process it simulates.
///
/// # RGB
///
/// RGB is an additive model with red, green, and blue channels, each ranging
/// `0..=255`. Blending RGB colors models the mixing of light: The result is the
/// percentage-weighted sum of the channels. The distance between two colors is
/// the Euclidian distance between their channels, which ranges from 0 to
/// √(3×255²) ≈ 441.67.
///
/// # CMYK
///
/// CMYK is a subtractive model with cyan, magenta, yellow, and key (black)
/// components, each a percentage `0..=100`. Blending CMYK colors approximates
/// the mixing of pigments: Each input color is converted to CMYK, the
/// components are averaged with the normalized percentages as weights, and the
/// result is converted back to RGB. The distance between two colors is the
/// Euclidian distance between their four CMYK components, which ranges from 0
/// to 200.
///
/// The conversion between RGB and CMYK is the usual naive formula. It trades
/// colorimetric accuracy for a simple relationship that is invertible up to
/// rounding.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colormix")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorModel {
    #[default]
    Rgb,
    Cmyk,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorModel {
    /// Select the color model from a boolean flag.
    ///
    /// User interfaces typically offer CMYK as the alternative to the default
    /// RGB. Hence `true` selects [`ColorModel::Cmyk`] and `false` selects
    /// [`ColorModel::Rgb`].
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub const fn from_alternate(use_alternate: bool) -> Self {
        if use_alternate {
            Self::Cmyk
        } else {
            Self::Rgb
        }
    }

    /// Determine whether this color model is subtractive.
    pub const fn is_subtractive(&self) -> bool {
        matches!(*self, Self::Cmyk)
    }

    /// Determine the maximum distance between two colors in this model.
    pub fn max_distance(&self) -> Float {
        match *self {
            Self::Rgb => (3.0 as Float * 255.0 * 255.0).sqrt(),
            Self::Cmyk => 200.0,
        }
    }

    /// Compute the distance between the two colors in this model.
    ///
    /// The distance is the Euclidian distance over three RGB channels or four
    /// CMYK components. All channels or components are weighted equally.
    pub fn distance(&self, color1: &Rgb, color2: &Rgb) -> Float {
        crate::core::distance(*self, color1.as_ref(), color2.as_ref())
    }

    /// Create a human-readable representation for this color model. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorModel {
    /// Mix the colors with the given percentages in this model.
    ///
    /// In RGB, each channel of the result is the sum of the corresponding
    /// channels of the inputs weighted by their percentages divided by 100.
    /// The percentages should add up to 100. In CMYK, the percentages are
    /// normalized by their total first. If that total is zero, including when
    /// there are no colors at all, the result is black in either model.
    ///
    /// ```
    /// # use colormix::{ColorModel, Rgb};
    /// # use colormix::error::Error;
    /// # fn main() -> Result<(), Error> {
    /// let red: Rgb = "#ff0000".parse()?;
    /// let blue: Rgb = "#0000ff".parse()?;
    /// let purple = ColorModel::Rgb.mix(&[red, blue], &[50.0, 50.0])?;
    /// assert_eq!(purple.to_string(), "#800080");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// This method returns [`Error::ArityMismatch`] if the number of colors
    /// differs from the number of percentages.
    pub fn mix(&self, colors: &[Rgb], percentages: &[Float]) -> Result<Rgb, Error> {
        if colors.len() != percentages.len() {
            return Err(Error::ArityMismatch {
                colors: colors.len(),
                percentages: percentages.len(),
            });
        }

        let channels = colors.iter().map(|c| c.as_ref());
        Ok(Rgb::from(crate::core::mix(*self, channels, percentages)))
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rgb => "RGB",
            Self::Cmyk => "CMYK",
        };

        f.write_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::ColorModel;

    #[test]
    fn test_from_alternate() {
        assert_eq!(ColorModel::from_alternate(false), ColorModel::Rgb);
        assert_eq!(ColorModel::from_alternate(true), ColorModel::Cmyk);
        assert!(ColorModel::Cmyk.is_subtractive());
        assert!(!ColorModel::default().is_subtractive());
        assert_eq!(ColorModel::Cmyk.to_string(), "CMYK");
    }
}
