mod conversion;
mod difference;
mod equality;
mod mix;
mod model;
mod string;

// conversion
pub(crate) use conversion::{cmyk_to_rgb, rgb_to_cmyk, to_24bit};

// difference
pub(crate) use difference::distance;

// equality
pub use equality::to_eq_bits;

// mix
pub(crate) use mix::mix;

// model
pub use model::ColorModel;

// string
pub(crate) use string::{format_cmyk, parse_hashed};
