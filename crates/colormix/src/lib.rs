//! # Colormix
//!
//! Colormix searches for the blend of available colors that best approximates
//! a target color. Given a palette of colors, a target, and a color model, it
//! determines the percentage of each palette color so that mixing them comes
//! as close as possible to the target.
//!
//!
//! ## 1. Overview
//!
//! Colormix's main abstractions are:
//!
//!   * [`Rgb`] is the canonical **24-bit color**. It parses from and formats
//!     to hashed hexadecimal notation `#rrggbb`.
//!   * [`Cmyk`] is the derived **subtractive color** with cyan, magenta,
//!     yellow, and key percentages.
//!   * [`ColorModel`] selects **how colors mix and how far apart they are**,
//!     either additively in RGB or subtractively in CMYK.
//!   * [`Optimizer`] implements the **genetic search** for the best blend and
//!     returns it as a [`Candidate`] with percentages, mixed color, and
//!     distance to the target. Its [`opt::Options`] fine-tune the search.
//!
//! The search is heuristic. It reliably finds good blends but does not
//! guarantee the best possible one.
//!
//!
//! ## 2. Finding a Blend
//!
//! [`optimize`] takes the available colors, the target color, and a flag
//! selecting the CMYK model instead of RGB:
//!
//! ```
//! # use colormix::error::Error;
//! # fn main() -> Result<(), Error> {
//! let blend = colormix::optimize(&["#ff0000", "#0000ff"], "#800080", false)?;
//!
//! assert_eq!(blend.percentages().len(), 2);
//! assert!(blend.distance() < 10.0);
//! println!("{}", blend);
//! # Ok(())
//! # }
//! ```
//!
//! For reproducible results, diagnostic output, or different search
//! parameters, use [`optimize_with`] or an [`Optimizer`] with explicit
//! [`opt::Options`]. Since every optimizer owns its state, independent
//! searches may run on separate threads without coordination.
//!
//!
//! ## 3. Optional Features
//!
//! Colormix supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls colormix's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.

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
mod genetic;
mod object;
pub mod opt;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::ColorModel;
pub use genetic::{Candidate, Generation, Optimizer};
pub use object::{Cmyk, Rgb};

use error::Error;
use opt::Options;

/// Find the blend of available colors closest to the target color.
///
/// The colors are in hashed hexadecimal notation. If `use_alternate_space` is
/// `true`, colors are mixed and compared in CMYK, otherwise in RGB. The
/// search uses the default [`Options`] and hence is not reproducible.
///
/// The returned candidate has one percentage per available color, in the same
/// order. The percentages add up to approximately 100. Without any available
/// colors, the result is black with no percentages.
///
/// # Errors
///
/// This function returns [`Error::InvalidFormat`] if any of the color strings
/// is malformed.
pub fn optimize<S: AsRef<str>>(
    available_colors: &[S],
    target_color: &str,
    use_alternate_space: bool,
) -> Result<Candidate, Error> {
    optimize_with(
        available_colors,
        target_color,
        ColorModel::from_alternate(use_alternate_space),
        Options::default(),
    )
}

/// Find the blend of available colors closest to the target color in the
/// given color model and with the given options.
///
/// ```
/// # use colormix::ColorModel;
/// # use colormix::error::Error;
/// # use colormix::opt::Options;
/// # fn main() -> Result<(), Error> {
/// let options = Options::builder().generations(20).seed(13).build();
/// let blend = colormix::optimize_with(&["#123456"], "#123456", ColorModel::Cmyk, options)?;
///
/// assert_eq!(blend.color().to_string(), "#123456");
/// assert_eq!(blend.percentages(), &[100.0]);
/// assert_eq!(blend.distance(), 0.0);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// This function returns [`Error::InvalidFormat`] if any of the color strings
/// is malformed.
pub fn optimize_with<S: AsRef<str>>(
    available_colors: &[S],
    target_color: &str,
    model: ColorModel,
    options: Options,
) -> Result<Candidate, Error> {
    Ok(Optimizer::new(available_colors, target_color, model, options)?.run())
}

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Find the blend of available colors closest to the target color. <i
/// class=python-only>Python only!</i>
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "optimize", signature = (available_colors, target_color, use_alternate_space = false))]
pub fn py_optimize(
    available_colors: Vec<String>,
    target_color: &str,
    use_alternate_space: bool,
) -> PyResult<Candidate> {
    Ok(optimize(
        available_colors.as_slice(),
        target_color,
        use_alternate_space,
    )?)
}

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colormix(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_optimize, m)?)?;
    m.add_class::<Candidate>()?;
    m.add_class::<Cmyk>()?;
    m.add_class::<ColorModel>()?;
    m.add_class::<Rgb>()?;
    Ok(())
}

// ====================================================================================================================
